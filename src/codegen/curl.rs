//! Shell command using the curl CLI

use crate::models::Request;

/// Format request as a multi-line cURL command.
///
/// Headers go out exactly as typed, including ones that do not split.
pub fn render(request: &Request) -> String {
    let mut parts = vec![format!("curl -X {} '{}'", request.method, request.url)];

    for header in &request.headers {
        parts.push(format!("-H '{}'", header));
    }

    if request.has_body() {
        parts.push(format!("-d '{}'", request.body));
    }

    if request.follow_redirects {
        parts.push("-L".to_string());
    }

    if request.timeout_secs > 0 {
        parts.push(format!("--max-time {}", request.timeout_secs));
    }

    let mut out = parts.join(" \\\n  ");
    out.push('\n');
    out
}
