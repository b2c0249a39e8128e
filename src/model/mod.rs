//! Endpoint catalog: combine the extracted spec with categories and filenames.

use crate::Result;
use crate::category;
use crate::render::FilenameRegistry;
use crate::spec::{Method, Operation, Specification};
use indexmap::IndexMap;
use serde::Serialize;

/// One (path, method) pair, ready to render. Holds copies, not references
/// into the specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
    pub operation: Operation,
    pub category: String,
    pub filename: String,
}

/// Endpoints grouped by category, in first-encounter order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub categories: IndexMap<String, Vec<Endpoint>>,
}

impl Catalog {
    pub fn endpoint_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.categories.values().flatten()
    }
}

/// Categorize every operation and give it a unique filename.
pub fn build_catalog(spec: &Specification) -> Result<Catalog> {
    let mut registry = FilenameRegistry::new()?;
    let mut catalog = Catalog::default();

    for (path, method, op) in spec.operations() {
        let category = category::categorize(path, &op.tags);
        let base = registry.base_name(method, path, op.summary.as_deref());
        let filename = registry.assign(base);

        catalog
            .categories
            .entry(category.to_string())
            .or_default()
            .push(Endpoint {
                path: path.to_string(),
                method,
                operation: op.clone(),
                category: category.to_string(),
                filename,
            });
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::extract;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_operation_becomes_one_endpoint() {
        let spec = extract(
            "/a:\n  get:\n  post:\n  put:\n  delete:\n  patch:\n/b:\n  get:\n    summary: B\n",
        );
        let catalog = build_catalog(&spec).unwrap();
        assert_eq!(catalog.endpoint_count(), 6);
    }

    #[test]
    fn categories_keep_first_encounter_order() {
        let spec = extract(
            "/v1/task/1:\n  get:\n/v1/chat/completions:\n  post:\n/v1/task/2:\n  get:\n",
        );
        let catalog = build_catalog(&spec).unwrap();

        let order: Vec<&str> = catalog.categories.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["task-services", "openai-gpt"]);

        let tasks: Vec<&str> = catalog.categories["task-services"]
            .iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(tasks, vec!["/v1/task/1", "/v1/task/2"]);
    }

    #[test]
    fn duplicate_summaries_get_suffixes_across_categories() {
        let spec = extract(
            "/v1/images/a:\n  post:\n    summary: Create\n/v1/audio/b:\n  post:\n    summary: Create\n",
        );
        let catalog = build_catalog(&spec).unwrap();
        let names: Vec<(&str, &str)> = catalog
            .endpoints()
            .map(|e| (e.category.as_str(), e.filename.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("image-models", "create"), ("audio-models", "create-1")]
        );
    }

    #[test]
    fn end_to_end_midjourney_endpoint() {
        let spec = extract(
            "paths:\n  /v1/images/generations:\n    post:\n      tags:\n        - Midjourney Imagine\n      summary: Generate Image\n",
        );
        let catalog = build_catalog(&spec).unwrap();
        let endpoint = catalog.endpoints().next().unwrap();

        assert_eq!(endpoint.category, "midjourney");
        assert_eq!(endpoint.filename, "generate-image");
        assert_eq!(endpoint.method, Method::Post);
    }
}
