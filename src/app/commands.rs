//! Command handlers - what each menu entry does

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::app::prompt::parse_leading_number;
use crate::app::Shell;
use crate::codegen::{self, Language};
use crate::constants::{JSON_CONTENT_TYPE_HEADER, MAX_HEADERS, MAX_HEADER_LEN, MAX_URL_LEN};
use crate::json::{format_json, looks_like_json};
use crate::models::{NetworkResponse, Request, Response};
use crate::network::Transport;
use crate::ui::{self, status_role, Role};

impl<R: BufRead, W: Write, T: Transport> Shell<R, W, T> {
    // ========================
    // New request
    // ========================

    /// Configure a request, store it in the slot and send it
    pub(super) fn new_request(&mut self) -> Result<()> {
        let request = self.configure_request()?;
        self.state.store(request.clone());
        self.send_request(&request)?;
        self.state.mark_sent();
        Ok(())
    }

    pub(super) fn configure_request(&mut self) -> Result<Request> {
        self.emit("\n")?;
        self.say(Role::Heading, "=== Configure Request ===")?;

        let url = self.prompt_url()?;
        let method = self.ask("Enter Method (GET/POST/PUT/DELETE/PATCH) [GET]: ")?;
        let mut request = Request::new(url, &method);

        if self.ask_yes_no("\nAdd headers? (y/n) [n]: ", false)? {
            request.headers = self.prompt_headers()?;
        }

        if request.method_accepts_body() && self.ask_yes_no("\nAdd request body? (y/n) [n]: ", false)? {
            request.body = self.read_body()?;
            self.add_json_content_type(&mut request)?;
        }

        request.follow_redirects = self.ask_yes_no("\nFollow redirects? (y/n) [y]: ", true)?;
        request.timeout_secs = self.prompt_timeout()?;
        request.verbose = self.ask_yes_no("Verbose mode? (y/n) [n]: ", false)?;

        Ok(request)
    }

    fn prompt_url(&mut self) -> Result<String> {
        loop {
            let url = self.ask("\nEnter URL: ")?;
            let url = url.trim();
            if url.is_empty() {
                self.say(Role::Error, "[!] URL is required")?;
            } else if url.len() > MAX_URL_LEN {
                self.say(
                    Role::Error,
                    &format!("[!] URL too long (max {} characters)", MAX_URL_LEN),
                )?;
            } else {
                return Ok(url.to_string());
            }
        }
    }

    fn prompt_headers(&mut self) -> Result<Vec<String>> {
        self.emit("Enter headers (format: Key: Value, empty line to finish):\n")?;
        let mut headers = Vec::new();

        while headers.len() < MAX_HEADERS {
            let header = self.ask(&format!("  Header {}: ", headers.len() + 1))?;
            if header.is_empty() {
                return Ok(headers);
            }
            if header.len() > MAX_HEADER_LEN {
                self.say(
                    Role::Error,
                    &format!("[!] Header too long (max {} characters), skipped", MAX_HEADER_LEN),
                )?;
                continue;
            }
            headers.push(header);
        }

        self.say(
            Role::Warning,
            &format!("[!] Header limit of {} reached", MAX_HEADERS),
        )?;
        Ok(headers)
    }

    fn prompt_timeout(&mut self) -> Result<u64> {
        let input = self.ask("Timeout in seconds (0 for none) [0]: ")?;
        if input.trim().is_empty() {
            return Ok(0);
        }
        match parse_leading_number(&input) {
            Some(secs) => Ok(secs),
            None => {
                self.say(Role::Error, "[!] Invalid timeout, using 0")?;
                Ok(0)
            }
        }
    }

    /// JSON-looking bodies get a content type unless one was given
    fn add_json_content_type(&mut self, request: &mut Request) -> Result<()> {
        let body_is_json = request
            .body
            .trim_start_matches(' ')
            .starts_with(['{', '[']);

        if body_is_json && !request.has_header("Content-Type") && request.headers.len() < MAX_HEADERS {
            request.headers.push(JSON_CONTENT_TYPE_HEADER.to_string());
            info!("Auto-added JSON content type");
            self.say(
                Role::Info,
                &format!("[i] Auto-added {} header", JSON_CONTENT_TYPE_HEADER),
            )?;
        }
        Ok(())
    }

    // ========================
    // Sending
    // ========================

    pub(super) fn send_request(&mut self, request: &Request) -> Result<()> {
        self.emit("\n")?;
        self.say(
            Role::Warning,
            &format!("[→] Sending {} request to {}...", request.method, request.url),
        )?;

        if request.verbose {
            self.print_request_trace(request)?;
        }

        match self.transport.execute(request) {
            NetworkResponse::Success(response) => {
                if request.verbose {
                    self.print_response_trace(&response)?;
                }
                self.print_response(&response)
            }
            NetworkResponse::Error { message, .. } => {
                self.say(Role::Error, &format!("[✗] Request failed: {}", message))
            }
        }
    }

    fn print_request_trace(&mut self, request: &Request) -> Result<()> {
        let mut trace = format!("> {} {}\n", request.method, request.url);
        for header in &request.headers {
            trace.push_str(&format!("> {}\n", header));
        }
        if request.has_body() {
            trace.push_str(&format!("> [{} bytes of body]\n", request.body.len()));
        }
        self.emit(&trace)
    }

    fn print_response_trace(&mut self, response: &Response) -> Result<()> {
        let mut trace = format!("< {} {}", response.version, response.status_code);
        if !response.reason.is_empty() {
            trace.push(' ');
            trace.push_str(&response.reason);
        }
        trace.push('\n');
        for header in &response.headers {
            trace.push_str(&format!("< {}: {}\n", header.key, header.value));
        }
        self.emit(&trace)
    }

    fn print_response(&mut self, response: &Response) -> Result<()> {
        self.say(
            Role::Success,
            &format!("[✓] Response received in {:.2}ms", response.time_ms),
        )?;

        let mut status = format!("[i] Status Code: {}", response.status_code);
        if !response.reason.is_empty() {
            status.push(' ');
            status.push_str(&response.reason);
        }
        if !response.is_success() {
            warn!(status = response.status_code, "Non-2xx response");
        }
        self.say(status_role(response.status_code), &status)?;

        self.emit("\n")?;
        self.say(Role::Heading, "--- Response Body ---")?;
        let body = if looks_like_json(&response.body) {
            format_json(&response.body)
        } else {
            format!("{}\n", response.body)
        };
        self.emit(&body)?;
        self.say(Role::Heading, "---------------------")
    }

    // ========================
    // Last request
    // ========================

    pub(super) fn view_last_request(&mut self) -> Result<()> {
        let Some(request) = self.state.last_request().cloned() else {
            return self.say(Role::Error, "[!] No request made yet");
        };

        let label = |text: &str| self.palette.paint(text, Role::Label);
        let mut out = String::from("\n");
        out.push_str(&self.palette.paint("=== Last Request ===", Role::Heading));
        out.push('\n');
        out.push_str(&format!("{} {}\n", label("URL:"), request.url));
        out.push_str(&format!("{} {}\n", label("Method:"), request.method));

        if !request.headers.is_empty() {
            out.push_str(&format!("{}\n", label("Headers:")));
            for header in &request.headers {
                out.push_str(&format!("  {}\n", header));
            }
        }

        if request.has_body() {
            out.push_str(&format!("{}\n{}\n", label("Body:"), request.body));
        }

        out.push_str(&format!(
            "{} {}\n",
            label("Follow Redirects:"),
            yes_no(request.follow_redirects)
        ));
        out.push_str(&format!("{} {} seconds\n", label("Timeout:"), request.timeout_secs));
        out.push_str(&format!("{} {}\n", label("Verbose:"), yes_no(request.verbose)));
        if let Some(sent) = self.state.last_sent() {
            out.push_str(&format!(
                "{} {}\n",
                label("Sent:"),
                sent.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        self.emit(&out)
    }

    // ========================
    // Code generation
    // ========================

    pub(super) fn generate_code(&mut self) -> Result<()> {
        let Some(request) = self.state.last_request().cloned() else {
            return self.say(Role::Error, "[!] No request to generate code from");
        };

        let mut items: Vec<&str> = Language::ALL.iter().map(|l| l.menu_label()).collect();
        items.push("All Languages");
        let menu = ui::boxed_menu(self.palette.as_ref(), "Generate Code", &items, Role::CodeMenu);
        self.emit("\n")?;
        self.emit(&menu)?;

        let choice = self.ask("\nSelect language: ")?;
        let choice = choice.trim().parse::<usize>().ok();

        let code = match choice {
            Some(n) if (1..=Language::ALL.len()).contains(&n) => {
                codegen::render_section(&request, Language::ALL[n - 1], self.palette.as_ref())
            }
            Some(n) if n == Language::ALL.len() + 1 => {
                codegen::render_all(&request, self.palette.as_ref())
            }
            _ => return self.say(Role::Error, "[!] Invalid choice"),
        };

        self.emit("\n")?;
        self.emit(&code)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
