use crate::constants::DEFAULT_METHOD;

/// A header split into key and value.
///
/// Requests keep headers as the raw `Key: Value` lines the user typed; this
/// pair only exists where a consumer needs structured access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Best-effort split of a raw header line at its first colon.
///
/// Leading spaces are stripped from the value; the key is kept as typed.
/// Returns `None` when the line has no colon at all.
pub fn split_header(raw: &str) -> Option<Header> {
    let (key, value) = raw.split_once(':')?;
    Some(Header::new(key, value.trim_start_matches(' ')))
}

/// Normalizes user input into a method token: uppercase, `GET` when empty.
pub fn normalize_method(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_METHOD.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// The single HTTP request a session works with
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub url: String,
    /// Uppercase method token, never empty
    pub method: String,
    /// Raw `Key: Value` lines in insertion order, duplicates allowed
    pub headers: Vec<String>,
    pub body: String,
    pub follow_redirects: bool,
    /// Seconds, 0 disables the timeout
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            url: String::new(),
            method: String::from(DEFAULT_METHOD),
            headers: Vec::new(),
            body: String::new(),
            follow_redirects: true,
            timeout_secs: 0,
            verbose: false,
        }
    }
}

impl Request {
    pub fn new(url: impl Into<String>, method: &str) -> Self {
        Request {
            url: url.into(),
            method: normalize_method(method),
            ..Request::default()
        }
    }

    pub fn with_header(mut self, raw: impl Into<String>) -> Self {
        self.headers.push(raw.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Headers that split cleanly, in original order
    pub fn parsed_headers(&self) -> Vec<Header> {
        self.headers.iter().filter_map(|h| split_header(h)).collect()
    }

    /// Case-insensitive lookup on the parsed header keys
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .filter_map(|h| split_header(h))
            .any(|h| h.key.eq_ignore_ascii_case(name))
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Whether the prompt should offer a body for this method
    pub fn method_accepts_body(&self) -> bool {
        !matches!(self.method.as_str(), "GET" | "DELETE")
    }
}

/// Buffered response from a completed HTTP exchange
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status_code: u16,
    /// Canonical reason phrase, empty for unknown codes
    pub reason: String,
    /// Protocol version as reported by the transport, e.g. `HTTP/1.1`
    pub version: String,
    pub headers: Vec<Header>,
    pub body: String,
    pub time_ms: f64,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Outcome of handing a request to the transport
#[derive(Clone, Debug, PartialEq)]
pub enum NetworkResponse {
    /// Any HTTP response, whatever the status code
    Success(Response),
    /// DNS, connect, TLS, timeout or body read failure
    Error { message: String, time_ms: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header_trims_leading_spaces_of_value() {
        let header = split_header("Content-Type:   application/json").unwrap();
        assert_eq!(header.key, "Content-Type");
        assert_eq!(header.value, "application/json");
    }

    #[test]
    fn test_split_header_uses_first_colon() {
        let header = split_header("Referer: http://example.com:8080/").unwrap();
        assert_eq!(header.key, "Referer");
        assert_eq!(header.value, "http://example.com:8080/");
    }

    #[test]
    fn test_split_header_without_colon() {
        assert_eq!(split_header("malformed-header"), None);
    }

    #[test]
    fn test_split_header_keeps_trailing_value_whitespace_and_key() {
        let header = split_header(" X-Pad :\tvalue ").unwrap();
        assert_eq!(header.key, " X-Pad ");
        assert_eq!(header.value, "\tvalue ");
    }

    #[test]
    fn test_normalize_method() {
        assert_eq!(normalize_method(""), "GET");
        assert_eq!(normalize_method("  \n"), "GET");
        assert_eq!(normalize_method("patch"), "PATCH");
        assert_eq!(normalize_method("purge\n"), "PURGE");
    }

    #[test]
    fn test_parsed_headers_skip_unparseable() {
        let req = Request::new("http://localhost", "get")
            .with_header("Accept: */*")
            .with_header("malformed-header")
            .with_header("X-Test: 1");
        let parsed = req.parsed_headers();
        assert_eq!(
            parsed,
            vec![Header::new("Accept", "*/*"), Header::new("X-Test", "1")]
        );
        assert_eq!(req.headers.len(), 3);
    }

    #[test]
    fn test_has_header_case_insensitive() {
        let req = Request::default().with_header("content-type: text/plain");
        assert!(req.has_header("Content-Type"));
        assert!(!req.has_header("Accept"));
    }

    #[test]
    fn test_default_request() {
        let req = Request::default();
        assert_eq!(req.method, "GET");
        assert!(req.follow_redirects);
        assert_eq!(req.timeout_secs, 0);
        assert!(!req.verbose);
        assert!(!req.method_accepts_body());
    }

    #[test]
    fn test_method_accepts_body() {
        assert!(Request::new("u", "post").method_accepts_body());
        assert!(Request::new("u", "PATCH").method_accepts_body());
        assert!(!Request::new("u", "delete").method_accepts_body());
    }

    #[test]
    fn test_response_success_range() {
        let mut resp = Response {
            status_code: 204,
            reason: String::new(),
            version: String::from("HTTP/1.1"),
            headers: Vec::new(),
            body: String::new(),
            time_ms: 1.0,
        };
        assert!(resp.is_success());
        resp.status_code = 301;
        assert!(!resp.is_success());
        resp.status_code = 199;
        assert!(!resp.is_success());
    }
}
