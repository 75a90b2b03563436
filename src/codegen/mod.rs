//! Request code generation
//!
//! Each target language is a plain text template filled from a [`Request`].
//! The templates do no quoting or escaping of user data.

pub mod curl;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

use crate::models::Request;
use crate::ui::{code_banner, Palette, Role};

/// Target language for generated code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Curl,
    JavaScript,
    Python,
    Rust,
    Java,
}

impl Language {
    /// Fixed order used by menus and by [`render_all`]
    pub const ALL: [Language; 5] = [
        Language::Curl,
        Language::JavaScript,
        Language::Python,
        Language::Rust,
        Language::Java,
    ];

    /// Banner title above a generated snippet
    pub fn title(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::JavaScript => "JavaScript (Fetch API)",
            Language::Python => "Python (requests)",
            Language::Rust => "Rust (reqwest)",
            Language::Java => "Java (HttpClient)",
        }
    }

    /// Short label for the code generation menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::JavaScript => "JavaScript (Fetch)",
            Language::Python => "Python (requests)",
            Language::Rust => "Rust (reqwest)",
            Language::Java => "Java (HttpClient)",
        }
    }
}

/// Render a request as source text in one language
pub fn render(request: &Request, language: Language) -> String {
    match language {
        Language::Curl => curl::render(request),
        Language::JavaScript => javascript::render(request),
        Language::Python => python::render(request),
        Language::Rust => rust::render(request),
        Language::Java => java::render(request),
    }
}

/// Render one language under its banner
pub fn render_section(request: &Request, language: Language, palette: &dyn Palette) -> String {
    let mut out = palette.paint(&code_banner(language.title()), Role::Success);
    out.push('\n');
    out.push_str(&render(request, language));
    out.push('\n');
    out
}

/// Every language in [`Language::ALL`] order, each section closed by a blank line
pub fn render_all(request: &Request, palette: &dyn Palette) -> String {
    Language::ALL
        .iter()
        .map(|language| render_section(request, *language, palette))
        .collect()
}

/// Client-library method name for the common verbs.
///
/// `None` means the generator has to fall back to its generic request call.
pub(crate) fn library_method(method: &str) -> Option<&'static str> {
    match method {
        "GET" => Some("get"),
        "POST" => Some("post"),
        "PUT" => Some("put"),
        "DELETE" => Some("delete"),
        _ => None,
    }
}
