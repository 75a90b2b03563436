//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "HTTPX";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Method used when the prompt is left empty
pub const DEFAULT_METHOD: &str = "GET";

/// Line that ends multiline body input
pub const BODY_TERMINATOR: &str = "@@@";

/// Header injected when a JSON-looking body has no explicit content type
pub const JSON_CONTENT_TYPE_HEADER: &str = "Content-Type: application/json";

/// Sanity limits enforced while prompting
pub const MAX_HEADERS: usize = 50;
pub const MAX_HEADER_LEN: usize = 512;
pub const MAX_URL_LEN: usize = 2048;
pub const MAX_BODY_LEN: usize = 16384;

/// Redirect hops followed when follow-redirects is on
pub const MAX_REDIRECTS: usize = 10;

/// Log file written to the working directory
pub const LOG_FILE: &str = "httpx.log";
