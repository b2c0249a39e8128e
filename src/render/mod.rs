pub mod filename;
pub mod locale;
pub mod mdx;

pub use filename::FilenameRegistry;
pub use locale::Locale;
pub use mdx::render_page;

pub const DEFAULT_BASE_URL: &str = "http://129.226.58.30";

/// Knobs that change page text without changing page structure.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Host prefixed to the path in code examples.
    pub base_url: String,
    pub locale: Locale,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: Locale::default(),
        }
    }
}
