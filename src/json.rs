//! Display-only JSON re-indenter
//!
//! Works on the character stream in one pass and never builds a tree, so any
//! input produces output: unbalanced brackets just indent oddly.

const INDENT: &str = "  ";

/// Whether text should be routed through [`format_json`] for display
pub fn looks_like_json(text: &str) -> bool {
    text.trim_start().starts_with(['{', '['])
}

/// Re-indents compact JSON with two spaces per level.
///
/// The output always ends with a newline.
pub fn format_json(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 2);
    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut prev: Option<char> = None;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' && prev != Some('\\') {
            in_string = !in_string;
            out.push(c);
        } else if in_string {
            out.push(c);
        } else {
            match c {
                '{' | '[' => {
                    out.push(c);
                    depth += 1;
                    if matches!(chars.peek(), Some(&next) if next != '}' && next != ']') {
                        push_newline(&mut out, depth);
                    }
                }
                '}' | ']' => {
                    depth -= 1;
                    if !matches!(prev, Some('{' | '[')) {
                        push_newline(&mut out, depth);
                    }
                    out.push(c);
                }
                ',' => {
                    out.push(c);
                    push_newline(&mut out, depth);
                }
                ':' => out.push_str(": "),
                _ if is_layout(c) => {}
                _ => out.push(c),
            }
        }

        if !is_layout(c) {
            prev = Some(c);
        }
    }

    out.push('\n');
    out
}

fn is_layout(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

// Negative depth (more closers than openers) renders flush left.
fn push_newline(out: &mut String, depth: i64) {
    out.push('\n');
    for _ in 0..depth.max(0) {
        out.push_str(INDENT);
    }
}
