//! Terminal presentation: colors and fixed screens
//!
//! Everything that knows about ANSI escapes lives behind [`Palette`], so the
//! formatter, the code generators and the shell logic stay testable on plain
//! strings.

use crossterm::style::Stylize;

use crate::constants::{APP_NAME, APP_VERSION, BODY_TERMINATOR};

/// What a piece of text means, independent of how it is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Banner,
    Menu,
    CodeMenu,
    Heading,
    Label,
    Success,
    Warning,
    Error,
    Info,
}

/// Presentation strategy for shell output
pub trait Palette {
    fn paint(&self, text: &str, role: Role) -> String;
}

/// ANSI colors via crossterm
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn paint(&self, text: &str, role: Role) -> String {
        let text = text.to_string();
        match role {
            Role::Banner | Role::Heading => text.cyan().to_string(),
            Role::Menu => text.blue().to_string(),
            Role::CodeMenu => text.magenta().to_string(),
            Role::Label => text.bold().to_string(),
            Role::Success => text.green().to_string(),
            Role::Warning => text.yellow().to_string(),
            Role::Error => text.red().to_string(),
            Role::Info => text.yellow().to_string(),
        }
    }
}

/// No styling at all; used when output is captured
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn paint(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// Color for a status code line
pub fn status_role(status: u16) -> Role {
    if (200..300).contains(&status) {
        Role::Success
    } else {
        Role::Error
    }
}

/// Section banner used by code generation output
pub fn code_banner(title: &str) -> String {
    format!("=== {} ===", title)
}

pub fn banner(palette: &dyn Palette) -> String {
    let title = format!("{} - Simple HTTP Client CLI v{}", APP_NAME, APP_VERSION);
    let rule = "═".repeat(title.chars().count() + 12);
    let mut out = String::from("\n");
    out.push_str(&palette.paint(&format!("╔{}╗", rule), Role::Banner));
    out.push('\n');
    out.push_str(&palette.paint(&format!("║      {}      ║", title), Role::Banner));
    out.push('\n');
    out.push_str(&palette.paint(&format!("╚{}╝", rule), Role::Banner));
    out.push_str("\n\n");
    out
}

/// Boxed numbered menu
pub fn boxed_menu(palette: &dyn Palette, title: &str, items: &[&str], role: Role) -> String {
    const WIDTH: usize = 49;
    let mut out = String::new();

    let head = format!("┌─ {} ", title);
    let fill = WIDTH.saturating_sub(head.chars().count() - 1);
    out.push_str(&palette.paint(&format!("{}{}┐", head, "─".repeat(fill)), role));
    out.push('\n');

    for (i, item) in items.iter().enumerate() {
        let entry = format!("  {}. {}", i + 1, item);
        let pad = WIDTH.saturating_sub(entry.chars().count());
        out.push_str(&palette.paint("│", role));
        out.push_str(&entry);
        out.push_str(&" ".repeat(pad));
        out.push_str(&palette.paint("│", role));
        out.push('\n');
    }

    out.push_str(&palette.paint(&format!("└{}┘", "─".repeat(WIDTH)), role));
    out.push('\n');
    out
}

pub fn help_text(palette: &dyn Palette) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&palette.paint(&format!("=== {} Help ===", APP_NAME), Role::Heading));
    out.push_str("\n\n");

    out.push_str(&palette.paint("Features:", Role::Label));
    out.push('\n');
    for line in [
        "Support for all HTTP methods (GET, POST, PUT, DELETE, PATCH, etc.)",
        "Custom headers support",
        "Multiline JSON/body input",
        "Follow redirects",
        "Request timeout",
        "Code generation for multiple languages",
        "Colored and formatted output",
        "Response time measurement",
    ] {
        out.push_str(&format!("  • {}\n", line));
    }
    out.push('\n');

    out.push_str(&palette.paint("Usage:", Role::Label));
    out.push('\n');
    out.push_str("  1. Select 'New Request' from the menu\n");
    out.push_str("  2. Enter request details (URL, method, headers, body)\n");
    out.push_str(&format!(
        "  3. For JSON body: Type or paste (multiline supported), end with {} on new line\n",
        BODY_TERMINATOR
    ));
    out.push_str("  4. View the response\n");
    out.push_str("  5. Generate code snippets in various languages\n\n");

    out.push_str(&palette.paint("Tips:", Role::Label));
    out.push('\n');
    out.push_str("  • For POST/PUT with JSON, add header: Content-Type: application/json\n");
    out.push_str(&format!(
        "  • Use {} on a new line to finish multiline body input\n",
        BODY_TERMINATOR
    ));
    out
}
