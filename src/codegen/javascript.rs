//! Browser / Node `fetch` call

use crate::models::Request;

pub fn render(request: &Request) -> String {
    let mut code = String::new();
    code.push_str(&format!("fetch('{}', {{\n", request.url));
    code.push_str(&format!("  method: '{}',\n", request.method));

    let headers = request.parsed_headers();
    if !headers.is_empty() {
        let pairs: Vec<String> = headers
            .iter()
            .map(|h| format!("    '{}': '{}'", h.key, h.value))
            .collect();
        code.push_str("  headers: {\n");
        code.push_str(&pairs.join(",\n"));
        code.push_str("\n  },\n");
    }

    if request.has_body() {
        if request.body.starts_with(['{', '[']) {
            code.push_str(&format!("  body: JSON.stringify({})\n", request.body));
        } else {
            code.push_str(&format!("  body: '{}'\n", request.body));
        }
    }

    code.push_str("})\n");
    code.push_str("  .then(response => response.json())\n");
    code.push_str("  .then(data => console.log(data))\n");
    code.push_str("  .catch(error => console.error('Error:', error));\n");
    code
}
