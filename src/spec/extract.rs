//! Line-oriented extraction of path/method/operation metadata.
//!
//! This is not a YAML parser. Each line is trimmed and classified by keyword:
//!
//! ```text
//! /v1/images/generations:      path marker
//!   post:                      method marker (get/post/put/delete/patch)
//!     tags:                    opens a tag block
//!       - Midjourney Imagine   tag item
//!     summary: Generate Image  operation field
//!     description: "..."       operation field
//! ```
//!
//! Indentation is ignored, so a nested `description:` (inside a schema or a
//! response) overwrites the operation's description. Lines that match nothing
//! are skipped; extraction never fails.

use crate::spec::{Method, Operation, Specification};

/// Scanner state. Each variant carries exactly the cursor data valid in it.
#[derive(Debug)]
enum State {
    /// No path seen yet.
    SeekPath,
    /// Inside a path, waiting for a method marker.
    SeekMethod { path: String },
    /// Inside (path, method), collecting summary/description.
    InOperationFields {
        path: String,
        method: Method,
        op: Operation,
    },
    /// Inside (path, method), collecting `- item` lines after `tags:`.
    InTagBlock {
        path: String,
        method: Method,
        op: Operation,
        tags: Vec<String>,
    },
}

/// Incremental extractor; feed lines, then `finish`.
#[derive(Debug)]
pub struct Extractor {
    spec: Specification,
    state: State,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            spec: Specification::new(),
            state: State::SeekPath,
        }
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        let state = std::mem::replace(&mut self.state, State::SeekPath);
        self.state = self.step(state, line);
    }

    /// Close any open operation (committing a pending tag block) and return
    /// the collected specification.
    pub fn finish(mut self) -> Specification {
        let state = std::mem::replace(&mut self.state, State::SeekPath);
        self.finalize(state);
        self.spec
    }

    fn step(&mut self, state: State, line: &str) -> State {
        if let Some(path) = path_marker(line) {
            self.finalize(state);
            return State::SeekMethod {
                path: path.to_string(),
            };
        }

        if let Some(method) = Method::from_marker(line) {
            return match self.finalize(state) {
                Some(path) => State::InOperationFields {
                    path,
                    method,
                    op: Operation::default(),
                },
                None => State::SeekPath,
            };
        }

        match state {
            State::InTagBlock {
                path,
                method,
                mut op,
                mut tags,
            } => {
                if line == "tags:" {
                    tags.clear();
                } else if let Some(item) = line.strip_prefix("- ") {
                    tags.push(item.trim().to_string());
                } else if !line.is_empty() {
                    // Any other non-empty line closes the block, then is read as a field.
                    op.tags = tags;
                    return operation_field(path, method, op, line);
                }
                State::InTagBlock {
                    path,
                    method,
                    op,
                    tags,
                }
            }
            State::InOperationFields { path, method, op } => {
                operation_field(path, method, op, line)
            }
            other => other,
        }
    }

    /// Store the in-progress operation, if any. Returns the open path so the
    /// caller can keep its cursor.
    fn finalize(&mut self, state: State) -> Option<String> {
        match state {
            State::SeekPath => None,
            State::SeekMethod { path } => Some(path),
            State::InOperationFields { path, method, op } => {
                self.spec.insert(path.clone(), method, op);
                Some(path)
            }
            State::InTagBlock {
                path,
                method,
                mut op,
                tags,
            } => {
                op.tags = tags;
                self.spec.insert(path.clone(), method, op);
                Some(path)
            }
        }
    }
}

/// Extract every (path, method) operation from specification text.
pub fn extract(text: &str) -> Specification {
    let mut extractor = Extractor::new();
    for line in text.lines() {
        extractor.feed(line);
    }
    let spec = extractor.finish();
    tracing::debug!(
        paths = spec.paths.len(),
        operations = spec.operation_count(),
        "extracted specification"
    );
    spec
}

fn operation_field(path: String, method: Method, mut op: Operation, line: &str) -> State {
    if line == "tags:" {
        return State::InTagBlock {
            path,
            method,
            op,
            tags: Vec::new(),
        };
    }
    if let Some(value) = line.strip_prefix("summary:") {
        op.summary = Some(field_value(value));
    } else if let Some(value) = line.strip_prefix("description:") {
        op.description = Some(field_value(value));
    }
    State::InOperationFields { path, method, op }
}

/// `/v1/chat/completions:` -> `/v1/chat/completions`
fn path_marker(line: &str) -> Option<&str> {
    if line.starts_with('/') {
        line.strip_suffix(':')
    } else {
        None
    }
}

/// Trim and remove one layer of matching single or double quotes.
fn field_value(raw: &str) -> String {
    let v = raw.trim();
    for quote in ['"', '\''] {
        if v.len() >= 2 && v.starts_with(quote) && v.ends_with(quote) {
            return v[1..v.len() - 1].to_string();
        }
    }
    v.to_string()
}
