//! Filesystem side of a run: read the input, write pages and the manifest.

use crate::Result;
use crate::error::DocgenError;
use crate::model::Catalog;
use crate::nav::NavigationGroup;
use crate::render::{RenderOptions, render_page};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Read the whole specification file as UTF-8 text.
pub fn read_spec(path: &Path) -> std::result::Result<String, DocgenError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DocgenError::InputNotFound(path.to_path_buf()),
        _ => DocgenError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `<out_dir>/<category>/<filename>.<extension>` for every endpoint.
/// Returns the number of pages written.
pub fn write_pages(
    catalog: &Catalog,
    out_dir: &Path,
    extension: &str,
    opts: &RenderOptions,
) -> Result<usize> {
    let mut written = 0usize;

    for (category, endpoints) in &catalog.categories {
        let dir = out_dir.join(category);
        fs::create_dir_all(&dir)
            .with_context(|| format!("create category directory {}", dir.display()))?;
        info!(category = %category, pages = endpoints.len(), "processing category");

        for endpoint in endpoints {
            let page = render_page(&endpoint.path, endpoint.method, &endpoint.operation, opts);
            let file = dir.join(format!("{}.{}", endpoint.filename, extension));
            fs::write(&file, page).with_context(|| format!("write page {}", file.display()))?;
            debug!(file = %file.display(), "wrote page");
            written += 1;
        }
    }

    Ok(written)
}

/// Serialize the manifest as pretty JSON, creating the parent directory.
pub fn write_navigation(path: &Path, groups: &[NavigationGroup]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create manifest directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(groups)?;
    fs::write(path, json).with_context(|| format!("write navigation manifest {}", path.display()))?;
    Ok(())
}
