//! In-memory shape of an extracted specification.
//!
//! Paths and methods keep the order in which they first appeared in the input,
//! which later drives category and navigation ordering.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// HTTP methods recognized as operation markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
    ];

    /// Lowercase key, as it appears in the input (`get`, `post`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
        }
    }

    pub fn upper(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Parse a method marker line such as `post:` (already trimmed).
    pub fn from_marker(line: &str) -> Option<Method> {
        let lower = line.to_ascii_lowercase();
        let key = lower.strip_suffix(':')?;
        Method::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upper())
    }
}

/// Metadata for one method on one path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl Operation {
    pub fn main_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Root parse result: path -> method -> operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specification {
    pub paths: IndexMap<String, IndexMap<Method, Operation>>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished operation. A repeated (path, method) pair replaces the
    /// earlier operation but keeps its original position.
    pub fn insert(&mut self, path: String, method: Method, op: Operation) {
        self.paths.entry(path).or_default().insert(method, op);
    }

    #[cfg(test)]
    pub fn get(&self, path: &str, method: Method) -> Option<&Operation> {
        self.paths.get(path).and_then(|methods| methods.get(&method))
    }

    /// Total number of (path, method) pairs.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }

    /// Iterate operations in input order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.iter().flat_map(|(path, methods)| {
            methods
                .iter()
                .map(move |(method, op)| (path.as_str(), *method, op))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn method_marker_is_case_insensitive() {
        assert_eq!(Method::from_marker("get:"), Some(Method::Get));
        assert_eq!(Method::from_marker("DELETE:"), Some(Method::Delete));
        assert_eq!(Method::from_marker("Patch:"), Some(Method::Patch));
    }

    #[test]
    fn method_marker_requires_colon_and_known_verb() {
        assert_eq!(Method::from_marker("get"), None);
        assert_eq!(Method::from_marker("head:"), None);
        assert_eq!(Method::from_marker("options:"), None);
        assert_eq!(Method::from_marker("get: x"), None);
    }

    #[test]
    fn reinserted_operation_keeps_position() {
        let mut spec = Specification::new();
        spec.insert("/a".into(), Method::Get, Operation::default());
        spec.insert("/b".into(), Method::Get, Operation::default());
        let replaced = Operation {
            summary: Some("again".into()),
            ..Operation::default()
        };
        spec.insert("/a".into(), Method::Get, replaced.clone());

        let order: Vec<&str> = spec.operations().map(|(p, _, _)| p).collect();
        assert_eq!(order, vec!["/a", "/b"]);
        assert_eq!(spec.get("/a", Method::Get), Some(&replaced));
        assert_eq!(spec.operation_count(), 2);
    }
}
