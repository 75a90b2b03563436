//! HTTP client wrapper - executes requests and buffers responses

use std::time::{Duration, Instant};

use reqwest::redirect::Policy;
use tracing::{debug, info, warn};

use crate::constants::MAX_REDIRECTS;
use crate::models::{split_header, Header, NetworkResponse, Request, Response};

/// Executes a request to completion
pub trait Transport {
    fn execute(&self, request: &Request) -> NetworkResponse;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &Request) -> NetworkResponse {
        (**self).execute(request)
    }
}

/// Transport backed by reqwest.
///
/// Every call builds a fresh client so redirect, timeout and trace settings
/// come from the request alone and nothing is pooled between calls.
pub struct ReqwestTransport {
    runtime: tokio::runtime::Runtime,
}

impl ReqwestTransport {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(ReqwestTransport { runtime })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &Request) -> NetworkResponse {
        info!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            body_len = request.body.len(),
            "Sending request"
        );

        let start = Instant::now();
        let result = self.runtime.block_on(send(request));
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(mut response) => {
                response.time_ms = elapsed;
                info!(status = response.status_code, time_ms = elapsed, "Response received");
                NetworkResponse::Success(response)
            }
            Err(message) => {
                warn!(%message, time_ms = elapsed, "Request failed");
                NetworkResponse::Error {
                    message,
                    time_ms: elapsed,
                }
            }
        }
    }
}

/// Create a client configured from the request's transport options
fn build_client(request: &Request) -> reqwest::Result<reqwest::Client> {
    let redirect = if request.follow_redirects {
        Policy::limited(MAX_REDIRECTS)
    } else {
        Policy::none()
    };

    let mut builder = reqwest::Client::builder()
        .redirect(redirect)
        .pool_max_idle_per_host(0)
        .connection_verbose(request.verbose);

    if request.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(request.timeout_secs));
    }

    builder.build()
}

/// Build a request from the stored fields
fn build_request(
    client: &reqwest::Client,
    request: &Request,
) -> Result<reqwest::RequestBuilder, String> {
    let method = reqwest::Method::from_bytes(request.method.as_bytes())
        .map_err(|_| format!("Invalid HTTP method: {}", request.method))?;

    let mut req_builder = client.request(method, &request.url);

    for raw in &request.headers {
        match split_header(raw) {
            Some(header) => {
                req_builder = req_builder.header(header.key.trim(), header.value.trim_end());
            }
            None => warn!(header = %raw, "Skipping header without a colon"),
        }
    }

    // A String body carries its own Content-Length.
    if request.has_body() {
        req_builder = req_builder.body(request.body.clone());
    }

    Ok(req_builder)
}

async fn send(request: &Request) -> Result<Response, String> {
    let client =
        build_client(request).map_err(|e| format!("Failed to build HTTP client: {}", e))?;
    let req_builder = build_request(&client, request)?;

    let resp = req_builder
        .send()
        .await
        .map_err(|e| describe_error(&e, request.timeout_secs))?;

    let status = resp.status();
    let version = format!("{:?}", resp.version());
    let headers = resp
        .headers()
        .iter()
        .map(|(name, value)| Header::new(name.as_str(), String::from_utf8_lossy(value.as_bytes())))
        .collect();
    debug!(%status, %version, "Reading response body");

    let body = resp
        .text()
        .await
        .map_err(|e| format!("Error reading body: {}", e))?;

    Ok(Response {
        status_code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        version,
        headers,
        body,
        time_ms: 0.0,
    })
}

fn describe_error(e: &reqwest::Error, timeout_secs: u64) -> String {
    if e.is_timeout() {
        format!("Request timed out ({}s)", timeout_secs)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Too many redirects: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::{Arc, Mutex};
    use std::thread;

    const REDIRECT: &str =
        "HTTP/1.1 302 Found\r\nLocation: /done\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const OK: &str = "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";

    /// Reads one request head and its Content-Length body off the stream
    fn read_request(stream: &TcpStream) -> String {
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            head.push_str(&line);
        }
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();
        format!("{}\r\n{}", head, String::from_utf8(body).unwrap())
    }

    /// Answers one connection per reply, in order, and returns the raw requests
    fn serve_replies(replies: Vec<&'static str>) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for reply in replies {
                let (mut stream, _) = listener.accept().unwrap();
                seen.push(read_request(&stream));
                stream.write_all(reply.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            seen
        });
        (format!("http://{}/items", addr), handle)
    }

    fn serve_once(reply: &'static str) -> (String, thread::JoinHandle<String>) {
        let (url, handle) = serve_replies(vec![reply]);
        let handle = thread::spawn(move || handle.join().unwrap().remove(0));
        (url, handle)
    }

    /// Reads each request and waits `delay` before answering; never joined
    fn serve_delayed(reply: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                read_request(&stream);
                thread::sleep(delay);
                let _ = stream.write_all(reply.as_bytes());
            }
        });
        format!("http://{}/items", addr)
    }

    fn expect_error(outcome: NetworkResponse) -> String {
        match outcome {
            NetworkResponse::Error { message, .. } => message,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn expect_success(outcome: NetworkResponse) -> Response {
        match outcome {
            NetworkResponse::Success(response) => response,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_execute_sends_method_headers_and_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: 8\r\nConnection: close\r\n\r\n{\"ok\":1}",
        );
        let mut request = Request::new(url, "purge")
            .with_header("X-Test:   1")
            .with_header("malformed-header")
            .with_body(r#"{"a":1}"#);
        request.timeout_secs = 10;

        let transport = ReqwestTransport::new().unwrap();
        let outcome = transport.execute(&request);
        let seen = server.join().unwrap();

        match outcome {
            NetworkResponse::Success(response) => {
                assert_eq!(response.status_code, 201);
                assert_eq!(response.reason, "Created");
                assert_eq!(response.version, "HTTP/1.1");
                assert_eq!(response.body, "{\"ok\":1}");
                assert!(response.is_success());
                assert!(response
                    .headers
                    .iter()
                    .any(|h| h.key == "content-type" && h.value == "application/json"));
                assert!(response.time_ms >= 0.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let lowered = seen.to_lowercase();
        assert!(seen.starts_with("PURGE /items HTTP/1.1\r\n"));
        assert!(lowered.contains("x-test: 1\r\n"));
        assert!(lowered.contains("content-length: 7\r\n"));
        assert!(!lowered.contains("malformed-header"));
        assert!(seen.ends_with("\r\n{\"a\":1}"));
    }

    #[test]
    fn test_non_2xx_is_not_a_transport_error() {
        let (url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 7\r\nConnection: close\r\n\r\nmissing",
        );
        let transport = ReqwestTransport::new().unwrap();
        let outcome = transport.execute(&Request::new(url, "GET"));
        server.join().unwrap();

        match outcome {
            NetworkResponse::Success(response) => {
                assert_eq!(response.status_code, 404);
                assert!(!response.is_success());
                assert_eq!(response.body, "missing");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_is_a_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let outcome = transport.execute(&Request::new("not a url", "GET"));
        match outcome {
            NetworkResponse::Error { message, .. } => assert!(message.starts_with("Request failed")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_method_token_is_a_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let outcome = transport.execute(&Request::new("http://127.0.0.1:9/", "BAD METHOD"));
        match outcome {
            NetworkResponse::Error { message, .. } => {
                assert_eq!(message, "Invalid HTTP method: BAD METHOD")
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_refused_connection_is_a_connect_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let transport = ReqwestTransport::new().unwrap();
        let message = expect_error(transport.execute(&Request::new(format!("http://{}/", addr), "GET")));
        assert!(message.starts_with("Connection failed"), "{}", message);
    }

    #[test]
    fn test_silent_server_hits_timeout() {
        let url = serve_delayed(OK, Duration::from_secs(5));
        let mut request = Request::new(url, "GET");
        request.timeout_secs = 1;

        let transport = ReqwestTransport::new().unwrap();
        let started = Instant::now();
        let message = expect_error(transport.execute(&request));
        assert_eq!(message, "Request timed out (1s)");
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_zero_timeout_waits_for_slow_server() {
        let url = serve_delayed(OK, Duration::from_millis(1200));
        let transport = ReqwestTransport::new().unwrap();
        let response = expect_success(transport.execute(&Request::new(url, "GET")));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "ok");
    }

    #[test]
    fn test_redirect_returned_when_not_following() {
        let (url, server) = serve_once(REDIRECT);
        let mut request = Request::new(url, "GET");
        request.follow_redirects = false;

        let transport = ReqwestTransport::new().unwrap();
        let response = expect_success(transport.execute(&request));
        server.join().unwrap();

        assert_eq!(response.status_code, 302);
        assert_eq!(response.reason, "Found");
        assert!(response
            .headers
            .iter()
            .any(|h| h.key == "location" && h.value == "/done"));
    }

    #[test]
    fn test_redirect_followed_by_default() {
        let (url, server) = serve_replies(vec![REDIRECT, OK]);
        let transport = ReqwestTransport::new().unwrap();
        let response = expect_success(transport.execute(&Request::new(url, "GET")));
        let seen = server.join().unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "ok");
        assert_eq!(seen.len(), 2);
        assert!(seen[1].starts_with("GET /done HTTP/1.1\r\n"));
    }

    #[test]
    fn test_redirect_loop_stops_at_limit() {
        let url = serve_delayed(REDIRECT, Duration::ZERO);
        let transport = ReqwestTransport::new().unwrap();
        let message = expect_error(transport.execute(&Request::new(url, "GET")));
        assert!(message.starts_with("Too many redirects"), "{}", message);
    }

    // The only test that installs the global subscriber.
    #[test]
    fn test_verbose_request_traces_connection_to_log() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        crate::logging::init(move || writer.clone()).unwrap();

        let (url, server) = serve_once(OK);
        let mut request = Request::new(url, "REPORT");
        request.verbose = true;

        let transport = ReqwestTransport::new().unwrap();
        let response = expect_success(transport.execute(&request));
        server.join().unwrap();
        assert_eq!(response.status_code, 200);

        let log = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains(crate::logging::VERBOSE_TARGET), "{}", log);
        assert!(log.contains("REPORT /items HTTP/1.1"), "{}", log);
        assert!(log.contains("Sending request"));
    }
}
