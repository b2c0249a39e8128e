//! Spec layer: the path -> method -> operation model and the line scanner
//! that fills it.
//!
//! This module is intentionally separate from categorization and rendering.
//! It owns:
//! - Method / Operation / Specification types
//! - The lenient line-oriented extractor

pub mod extract;
pub mod operation;

pub use extract::extract;
pub use operation::{Method, Operation, Specification};
