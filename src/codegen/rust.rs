//! Async Rust program using reqwest on tokio

use crate::codegen::library_method;
use crate::models::Request;

pub fn render(request: &Request) -> String {
    let mut code = String::from("use reqwest;\n\n");
    code.push_str("#[tokio::main]\n");
    code.push_str("async fn main() -> Result<(), Box<dyn std::error::Error>> {\n");
    code.push_str("    let client = reqwest::Client::new();\n");

    if request.has_body() {
        code.push_str(&format!("    let body = r#\"{}\"#;\n\n", request.body));
    }

    match library_method(&request.method) {
        Some(name) => {
            code.push_str(&format!("    let response = client.{}(\"{}\")\n", name, request.url));
        }
        None => {
            code.push_str(&format!(
                "    let response = client.request(reqwest::Method::from_bytes(b\"{}\")?, \"{}\")\n",
                request.method, request.url
            ));
        }
    }

    for header in request.parsed_headers() {
        code.push_str(&format!(
            "        .header(\"{}\", \"{}\")\n",
            header.key, header.value
        ));
    }

    if request.has_body() {
        code.push_str("        .body(body)\n");
    }

    code.push_str("        .send()\n");
    code.push_str("        .await?;\n\n");
    code.push_str("    let body = response.text().await?;\n");
    code.push_str("    println!(\"{}\", body);\n");
    code.push_str("    Ok(())\n");
    code.push_str("}\n");
    code
}
