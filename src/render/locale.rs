//! Static page wording per output language.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Fixed strings interpolated into every page.
#[derive(Debug)]
pub struct Strings {
    pub keywords: &'static str,
    pub default_description_suffix: &'static str,
    pub interface_info: &'static str,
    pub request_method: &'static str,
    pub request_path: &'static str,
    pub auth_method: &'static str,
    pub auth_value: &'static str,
    pub tags: &'static str,
    pub none: &'static str,
    pub auth_heading: &'static str,
    pub auth_note: &'static str,
    pub usage_heading: &'static str,
    pub usage_note: &'static str,
    pub usage_steps: [&'static str; 3],
    pub examples_heading: &'static str,
    pub example_suffix: &'static str,
    pub related_heading: &'static str,
    pub related_note: &'static str,
    /// First-tag keyword -> description suffix; first match wins.
    pub vendor_suffixes: [(&'static str, &'static str); 4],
}

const EN: Strings = Strings {
    keywords: "Search keywords",
    default_description_suffix: "endpoint",
    interface_info: "Endpoint details",
    request_method: "Method",
    request_path: "Path",
    auth_method: "Authentication",
    auth_value: "Bearer Token",
    tags: "Tags",
    none: "None",
    auth_heading: "Authentication",
    auth_note: "Include a valid Bearer token in the request headers:",
    usage_heading: "Usage",
    usage_note: "Use the interactive API playground below to try this endpoint. You can:",
    usage_steps: [
        "Enter request parameters in the right-hand panel",
        "Click \"Try it\" to send the request",
        "Inspect the live response",
    ],
    examples_heading: "Code examples",
    example_suffix: "example",
    related_heading: "Related endpoints",
    related_note: "Search related tags",
    vendor_suffixes: [
        ("openai", " - OpenAI API compatible endpoint"),
        ("gemini", " - Google Gemini model endpoint"),
        ("midjourney", " - Midjourney image generation endpoint"),
        ("suno", " - Suno AI music generation endpoint"),
    ],
};

const ZH: Strings = Strings {
    keywords: "搜索关键词",
    default_description_suffix: "接口",
    interface_info: "接口信息",
    request_method: "请求方法",
    request_path: "接口路径",
    auth_method: "认证方式",
    auth_value: "Bearer Token",
    tags: "标签",
    none: "无",
    auth_heading: "认证说明",
    auth_note: "请在请求头中包含有效的 Bearer Token：",
    usage_heading: "使用说明",
    usage_note: "使用下方的交互式 API 文档来测试此接口。你可以：",
    usage_steps: [
        "在右侧面板中输入请求参数",
        "点击\"Try it\"按钮发送请求",
        "查看实时的响应结果",
    ],
    examples_heading: "示例代码",
    example_suffix: "示例",
    related_heading: "相关接口",
    related_note: "搜索相关标签",
    vendor_suffixes: [
        ("openai", " - OpenAI API兼容接口"),
        ("gemini", " - Google Gemini模型接口"),
        ("midjourney", " - Midjourney图像生成接口"),
        ("suno", " - Suno AI音乐生成接口"),
    ],
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}
