use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod category;
mod error;
mod model;
mod nav;
mod render;
mod site;
mod spec;

use render::{Locale, RenderOptions};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "openapi-docgen")]
#[command(about = "Endpoint documentation pages from an OpenAPI file", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, env = "DOCGEN_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one page per endpoint plus the navigation manifest.
    Generate {
        #[arg(long = "spec", env = "DOCGEN_SPEC", default_value = "openapi.yaml")]
        input: PathBuf,

        #[arg(short = 'o', long, env = "DOCGEN_OUT", default_value = "api-reference")]
        out: PathBuf,

        #[arg(long, env = "DOCGEN_NAV", default_value = "generated-navigation.json")]
        nav: PathBuf,

        /// Prefix for page references in the manifest; empty for none.
        #[arg(long, env = "DOCGEN_NAV_PREFIX", default_value = "api-reference")]
        nav_prefix: String,

        #[arg(long, env = "DOCGEN_BASE_URL", default_value = render::DEFAULT_BASE_URL)]
        base_url: String,

        #[arg(long, env = "DOCGEN_LOCALE", value_enum, default_value_t = Locale::En)]
        locale: Locale,

        #[arg(long, default_value = "mdx")]
        extension: String,
    },
    /// Print the category and filename chosen for each endpoint.
    List {
        #[arg(long = "spec", env = "DOCGEN_SPEC", default_value = "openapi.yaml")]
        input: PathBuf,

        /// Dump the full catalog as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.cmd {
        Commands::Generate {
            input,
            out,
            nav,
            nav_prefix,
            base_url,
            locale,
            extension,
        } => {
            // 1) Load + extract.
            let text = site::read_spec(&input)?;
            let parsed = spec::extract(&text);
            info!(
                spec = %input.display(),
                paths = parsed.paths.len(),
                operations = parsed.operation_count(),
                "loaded specification"
            );

            // 2) Categorize + assign filenames.
            let catalog = model::build_catalog(&parsed)?;
            if catalog.endpoint_count() == 0 {
                warn!(spec = %input.display(), "no endpoints found");
            }

            // 3) Render pages.
            let opts = RenderOptions { base_url, locale };
            let pages = site::write_pages(&catalog, &out, &extension, &opts)?;

            // 4) Navigation manifest.
            let groups = nav::build_navigation(&catalog, &nav_prefix);
            site::write_navigation(&nav, &groups)?;

            let mut categories: Vec<&str> =
                catalog.categories.keys().map(String::as_str).collect();
            categories.sort_unstable();
            info!(pages, categories = categories.len(), "generation finished");

            println!("Wrote {} pages to {}", pages, out.display());
            println!(
                "Created {} category directories: {}",
                categories.len(),
                categories.join(", ")
            );
            println!("Wrote navigation manifest {}", nav.display());
        }
        Commands::List { input, json } => {
            let text = site::read_spec(&input)?;
            let catalog = model::build_catalog(&spec::extract(&text))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for e in catalog.endpoints() {
                    println!("{}\t{} {}\t{}", e.category, e.method, e.path, e.filename);
                }
            }
        }
    }

    Ok(())
}
