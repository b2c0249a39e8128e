use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run before any page is generated.
#[derive(Debug, Error)]
pub enum DocgenError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
