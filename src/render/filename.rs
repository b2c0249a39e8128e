//! Page filename derivation and collision handling.

use crate::Result;
use crate::spec::Method;
use regex::Regex;
use std::collections::HashSet;

/// Hands out sanitized, unique page filenames.
#[derive(Debug)]
pub struct FilenameRegistry {
    separators: Regex,
    assigned: HashSet<String>,
}

impl FilenameRegistry {
    pub fn new() -> Result<Self> {
        // Anything that is not a letter or digit (hyphens included) becomes a
        // single hyphen, which also collapses repeated hyphens.
        let separators = Regex::new(r"[^\p{L}\p{N}]+")?;
        Ok(Self {
            separators,
            assigned: HashSet::new(),
        })
    }

    /// Lowercase, keep letters/digits, join the rest with single hyphens.
    pub fn sanitize(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        self.separators
            .replace_all(&lower, "-")
            .trim_matches('-')
            .to_string()
    }

    /// Base name from the summary, or from method and path when the summary
    /// is missing or sanitizes to nothing.
    pub fn base_name(&self, method: Method, path: &str, summary: Option<&str>) -> String {
        let fallback = || self.sanitize(&format!("{}-{}", method.as_str(), path));
        match summary {
            Some(s) => {
                let name = self.sanitize(s);
                if name.is_empty() { fallback() } else { name }
            }
            None => fallback(),
        }
    }

    /// Reserve `base`, or `base-1`, `base-2`, ... if already taken.
    pub fn assign(&mut self, base: String) -> String {
        if self.assigned.insert(base.clone()) {
            return base;
        }
        let mut counter = 1usize;
        loop {
            let candidate = format!("{base}-{counter}");
            if self.assigned.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> FilenameRegistry {
        FilenameRegistry::new().unwrap()
    }

    #[test]
    fn sanitize_replaces_runs_and_trims() {
        let r = registry();
        assert_eq!(r.sanitize("Generate Image"), "generate-image");
        assert_eq!(r.sanitize("  Chat (GPT-4o) / stream!! "), "chat-gpt-4o-stream");
        assert_eq!(r.sanitize("a -- b"), "a-b");
        assert_eq!(r.sanitize("---"), "");
    }

    #[test]
    fn sanitize_keeps_non_ascii_letters() {
        let r = registry();
        assert_eq!(r.sanitize("生成图片 API"), "生成图片-api");
        assert_eq!(r.sanitize("Créer Vidéo"), "créer-vidéo");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let r = registry();
        for input in [
            "Generate Image",
            "  --Weird__Name--  ",
            "生成图片 (v2)",
            "POST /v1/chat/completions",
            "ÄÖÜ straße",
        ] {
            let once = r.sanitize(input);
            assert_eq!(r.sanitize(&once), once, "{input}");
        }
    }

    #[test]
    fn base_name_falls_back_to_method_and_path() {
        let r = registry();
        assert_eq!(
            r.base_name(Method::Post, "/v1/images/generations", None),
            "post-v1-images-generations"
        );
        assert_eq!(
            r.base_name(Method::Get, "/v1/models", Some("???")),
            "get-v1-models"
        );
        assert_eq!(
            r.base_name(Method::Get, "/v1/models", Some("List Models")),
            "list-models"
        );
    }

    #[test]
    fn collisions_get_numeric_suffix() {
        let mut r = registry();
        assert_eq!(r.assign("generate-image".into()), "generate-image");
        assert_eq!(r.assign("generate-image".into()), "generate-image-1");
        assert_eq!(r.assign("generate-image".into()), "generate-image-2");
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let mut r = registry();
        r.assign("foo-1".into());
        r.assign("foo".into());
        assert_eq!(r.assign("foo".into()), "foo-2");
    }
}
