//! Navigation manifest: one group per category, pages in catalog order.

use crate::category;
use crate::model::Catalog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub group: String,
    pub pages: Vec<String>,
}

/// Build the sidebar groups. Page references are `<category>/<filename>`,
/// prefixed with `prefix/` when a non-empty prefix is given.
pub fn build_navigation(catalog: &Catalog, prefix: &str) -> Vec<NavigationGroup> {
    let prefix = prefix.trim_end_matches('/');

    catalog
        .categories
        .iter()
        .filter(|(_, endpoints)| !endpoints.is_empty())
        .map(|(category, endpoints)| NavigationGroup {
            group: category::label(category),
            pages: endpoints
                .iter()
                .map(|e| {
                    if prefix.is_empty() {
                        format!("{}/{}", category, e.filename)
                    } else {
                        format!("{}/{}/{}", prefix, category, e.filename)
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_catalog;
    use crate::spec::extract;
    use pretty_assertions::assert_eq;

    const TEXT: &str = r#"
/v1/chat/completions:
  post:
    summary: Chat
/v1/images/generations:
  post:
    tags:
      - Midjourney Imagine
    summary: Generate Image
/v1/chat/models:
  get:
    summary: Models
/internal/ping:
  get:
"#;

    #[test]
    fn groups_follow_category_order_with_labels() {
        let catalog = build_catalog(&extract(TEXT)).unwrap();
        let nav = build_navigation(&catalog, "");

        assert_eq!(
            nav,
            vec![
                NavigationGroup {
                    group: "OpenAI GPT Series".into(),
                    pages: vec!["openai-gpt/chat".into(), "openai-gpt/models".into()],
                },
                NavigationGroup {
                    group: "Midjourney".into(),
                    pages: vec!["midjourney/generate-image".into()],
                },
                NavigationGroup {
                    group: "Other APIs".into(),
                    pages: vec!["other/get-internal-ping".into()],
                },
            ]
        );
    }

    #[test]
    fn prefix_is_prepended_once() {
        let catalog = build_catalog(&extract(TEXT)).unwrap();
        let nav = build_navigation(&catalog, "api-reference/");
        assert_eq!(nav[1].pages, vec!["api-reference/midjourney/generate-image"]);
    }

    #[test]
    fn page_count_matches_endpoint_count() {
        let catalog = build_catalog(&extract(TEXT)).unwrap();
        let pages: usize = build_navigation(&catalog, "docs")
            .iter()
            .map(|g| g.pages.len())
            .sum();
        assert_eq!(pages, catalog.endpoint_count());
    }

    #[test]
    fn manifest_serializes_as_group_and_pages() {
        let groups = vec![NavigationGroup {
            group: "Claude".into(),
            pages: vec!["claude/messages".into()],
        }];
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"[{"group":"Claude","pages":["claude/messages"]}]"#);
    }
}
