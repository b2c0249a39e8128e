use crate::render::RenderOptions;
use crate::spec::{Method, Operation};
use indexmap::IndexSet;

/// Render one endpoint page: front matter header, keyword callout, then the
/// body (interface summary, auth and usage notes, three code examples).
pub fn render_page(path: &str, method: Method, op: &Operation, opts: &RenderOptions) -> String {
    let text = opts.locale.strings();
    let upper = method.upper();
    let lower = method.as_str();

    let title = op
        .summary
        .clone()
        .unwrap_or_else(|| format!("{upper} {path}"));
    let description = enhanced_description(path, method, op, opts);
    let keywords = search_keywords(path, method, &title, &op.tags).join(", ");

    let title_field = yaml_quote(&title);
    let description_field = yaml_quote(&description);
    let openapi_field = yaml_quote(&format!("{upper} {path}"));

    let tag_list = if op.tags.is_empty() {
        text.none.to_string()
    } else {
        op.tags.join(", ")
    };
    let related = if op.tags.is_empty() {
        text.none.to_string()
    } else {
        op.tags
            .iter()
            .map(|t| format!("`{t}`"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let url = format!("{}{}", opts.base_url.trim_end_matches('/'), path);
    let [step1, step2, step3] = text.usage_steps;
    let example = text.example_suffix;

    format!(
        r#"---
title: {title_field}
description: {description_field}
openapi: {openapi_field}
mode: "wide"
---

<Info>
**{keywords_label}**: {keywords}
</Info>

# {title}

{description}

## {interface_info}

- **{request_method}**: `{upper}`
- **{request_path}**: `{path}`
- **{auth_method}**: {auth_value}
- **{tags_label}**: {tag_list}

## {auth_heading}

{auth_note}

```bash
Authorization: Bearer YOUR_API_KEY
```

## {usage_heading}

{usage_note}

1. {step1}
2. {step2}
3. {step3}

## {examples_heading}

### cURL {example}

```bash
curl -X {upper} "{url}" \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json"
```

### Python {example}

```python
import requests

url = "{url}"
headers = {{
    "Authorization": "Bearer YOUR_API_KEY",
    "Content-Type": "application/json"
}}

response = requests.{lower}(url, headers=headers)
print(response.json())
```

### JavaScript {example}

```javascript
const response = await fetch('{url}', {{
  method: '{upper}',
  headers: {{
    'Authorization': 'Bearer YOUR_API_KEY',
    'Content-Type': 'application/json'
  }}
}});

const data = await response.json();
console.log(data);
```

## {related_heading}

{related_note}: {related}
"#,
        keywords_label = text.keywords,
        interface_info = text.interface_info,
        request_method = text.request_method,
        request_path = text.request_path,
        auth_method = text.auth_method,
        auth_value = text.auth_value,
        tags_label = text.tags,
        auth_heading = text.auth_heading,
        auth_note = text.auth_note,
        usage_heading = text.usage_heading,
        usage_note = text.usage_note,
        examples_heading = text.examples_heading,
        related_heading = text.related_heading,
        related_note = text.related_note,
    )
}

/// Description (or the locale default), plus a vendor suffix chosen by the
/// first tag.
pub fn enhanced_description(
    path: &str,
    method: Method,
    op: &Operation,
    opts: &RenderOptions,
) -> String {
    let text = opts.locale.strings();
    let mut description = op.description.clone().unwrap_or_else(|| {
        format!("{} {} {}", method.upper(), path, text.default_description_suffix)
    });

    if let Some(main_tag) = op.main_tag() {
        let main_tag = main_tag.to_lowercase();
        if let Some((_, suffix)) = text
            .vendor_suffixes
            .iter()
            .find(|(keyword, _)| main_tag.contains(keyword))
        {
            description.push_str(suffix);
        }
    }
    description
}

/// Keywords for the search callout: tags, the method, path segments (empty
/// and `v`-prefixed segments dropped) and summary words; lowercased, trimmed,
/// deduplicated in first-seen order.
pub fn search_keywords(path: &str, method: Method, title: &str, tags: &[String]) -> Vec<String> {
    let candidates = tags
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(method.upper()))
        .chain(
            path.split('/')
                .filter(|part| !part.is_empty() && !part.starts_with('v')),
        )
        .chain(title.split_whitespace());

    let mut seen = IndexSet::new();
    for candidate in candidates {
        let kw = candidate.trim().to_lowercase();
        if !kw.is_empty() {
            seen.insert(kw);
        }
    }
    seen.into_iter().collect()
}

/// Double-quoted front matter scalar.
fn yaml_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
