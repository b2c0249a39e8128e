//! Category assignment and display labels.
//!
//! Both lookups are ordered rule lists: the first matching rule wins, so the
//! order of entries below is part of the behavior.

/// A vendor/model family matched against the lowercased first tag.
struct TagRule {
    keyword: &'static str,
    /// Checked in order once `keyword` matched; any needle hit selects the category.
    refinements: &'static [(&'static [&'static str], &'static str)],
    category: &'static str,
}

const fn family(keyword: &'static str, category: &'static str) -> TagRule {
    TagRule {
        keyword,
        refinements: &[],
        category,
    }
}

const TAG_RULES: &[TagRule] = &[
    TagRule {
        keyword: "openai",
        refinements: &[
            (&["gpt 4o", "gpt-4o", "gpt4o"], "openai-gpt4o"),
            (&["gpt", "reasoning"], "openai-gpt"),
            (&["audio"], "openai-audio"),
        ],
        category: "openai",
    },
    family("claude", "claude"),
    TagRule {
        keyword: "gemini",
        refinements: &[(&["veo3", "video"], "gemini-veo")],
        category: "gemini",
    },
    family("grok", "grok"),
    family("midjourney", "midjourney"),
    family("suno", "suno"),
    family("kling", "kling"),
    family("runway", "runway"),
    family("ideogram", "ideogram"),
    family("flux", "flux"),
    family("doubao", "doubao"),
    family("higgsfield", "higgsfield"),
    family("qwen", "qwen"),
    family("minimax", "minimax"),
];

/// Fallback rules on the lowercased path.
const PATH_RULES: &[(&[&str], &str)] = &[
    (&["/chat/"], "openai-gpt"),
    (&["/images/"], "image-models"),
    (&["/audio/"], "audio-models"),
    (&["/veo/"], "gemini-veo"),
    (&["/mj/"], "midjourney"),
    (&["gemini"], "gemini"),
    (&["/upload/", "/files"], "file-services"),
    (&["/task"], "task-services"),
];

pub const OTHER: &str = "other";

const LABELS: &[(&str, &str)] = &[
    ("openai", "OpenAI"),
    ("openai-gpt", "OpenAI GPT Series"),
    ("openai-gpt4o", "OpenAI GPT-4o"),
    ("openai-audio", "OpenAI Audio"),
    ("claude", "Claude"),
    ("gemini", "Gemini"),
    ("gemini-veo", "Gemini Veo Video"),
    ("grok", "Grok"),
    ("midjourney", "Midjourney"),
    ("suno", "Suno Music"),
    ("kling", "Kling Video"),
    ("runway", "Runway"),
    ("ideogram", "Ideogram"),
    ("flux", "Flux"),
    ("doubao", "Doubao"),
    ("higgsfield", "Higgsfield"),
    ("qwen", "Qwen"),
    ("minimax", "MiniMax"),
    ("image-models", "Image Generation Models"),
    ("audio-models", "Audio Processing Models"),
    ("file-services", "File Services"),
    ("task-services", "Task Management"),
    ("other", "Other APIs"),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn categorize_tag(tag: &str) -> Option<&'static str> {
    let main_tag = tag.to_lowercase();
    let rule = TAG_RULES.iter().find(|r| main_tag.contains(r.keyword))?;
    let refined = rule
        .refinements
        .iter()
        .find(|(needles, _)| contains_any(&main_tag, needles))
        .map(|(_, category)| *category);
    Some(refined.unwrap_or(rule.category))
}

/// Pick the documentation category for an endpoint: first tag, then path,
/// then `other`.
pub fn categorize(path: &str, tags: &[String]) -> &'static str {
    if let Some(category) = tags.first().and_then(|t| categorize_tag(t)) {
        return category;
    }

    let path_lower = path.to_lowercase();
    PATH_RULES
        .iter()
        .find(|(needles, _)| contains_any(&path_lower, needles))
        .map(|(_, category)| *category)
        .unwrap_or(OTHER)
}

/// Navigation label for a category key.
pub fn label(category: &str) -> String {
    LABELS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(category))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
/// (`"file-services"` -> `"File-Services"`).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
