//! Python script using the `requests` package

use crate::codegen::library_method;
use crate::models::Request;

pub fn render(request: &Request) -> String {
    let mut code = String::from("import requests\nimport json\n\n");
    code.push_str(&format!("url = '{}'\n", request.url));

    let headers = request.parsed_headers();
    if !headers.is_empty() {
        let pairs: Vec<String> = headers
            .iter()
            .map(|h| format!("    '{}': '{}'", h.key, h.value))
            .collect();
        code.push_str("headers = {\n");
        code.push_str(&pairs.join(",\n"));
        code.push_str("\n}\n\n");
    }

    if request.has_body() {
        code.push_str(&format!("data = '''{}'''\n\n", request.body));
    }

    let mut args = match library_method(&request.method) {
        Some(name) => format!("requests.{}(url", name),
        None => format!("requests.request('{}', url", request.method),
    };
    if !headers.is_empty() {
        args.push_str(", headers=headers");
    }
    if request.has_body() {
        args.push_str(", data=data");
    }

    code.push_str(&format!("response = {})\n", args));
    code.push_str("print(response.json())\n");
    code
}
