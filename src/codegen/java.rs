//! Java 11+ program using `java.net.http.HttpClient`

use crate::models::Request;

const BODY_INDENT: &str = "            ";

pub fn render(request: &Request) -> String {
    let mut code = String::new();
    code.push_str("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n\n");
    code.push_str("public class HttpExample {\n");
    code.push_str("    public static void main(String[] args) throws Exception {\n");
    code.push_str("        HttpClient client = HttpClient.newHttpClient();\n");

    if request.has_body() {
        code.push_str("        String jsonBody = \"\"\"\n");
        for line in request.body.lines() {
            code.push_str(BODY_INDENT);
            code.push_str(line);
            code.push('\n');
        }
        code.push_str(&format!("{}\"\"\";\n\n", BODY_INDENT));
    }

    code.push_str("        HttpRequest.Builder builder = HttpRequest.newBuilder()\n");
    code.push_str(&format!("            .uri(URI.create(\"{}\"))\n", request.url));

    for header in request.parsed_headers() {
        code.push_str(&format!(
            "            .header(\"{}\", \"{}\")\n",
            header.key, header.value
        ));
    }

    // The builder call is named after the method token itself.
    let publisher = if request.has_body() {
        "HttpRequest.BodyPublishers.ofString(jsonBody)"
    } else {
        "HttpRequest.BodyPublishers.noBody()"
    };
    code.push_str(&format!("            .{}({});\n", request.method, publisher));

    code.push_str("\n        HttpRequest request = builder.build();\n");
    code.push_str("        HttpResponse<String> response = client.send(request,\n");
    code.push_str("            HttpResponse.BodyHandlers.ofString());\n");
    code.push_str("        System.out.println(response.body());\n");
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}
