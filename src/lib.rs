//! # HTTPX
//!
//! A small interactive terminal HTTP client.
//!
//! ## Features
//! - Any HTTP method, including custom tokens
//! - Custom headers, kept exactly as typed
//! - Multiline request bodies
//! - Follow redirects, timeouts, verbose trace
//! - JSON response re-indenting
//! - Code generation: cURL, JavaScript, Python, Rust, Java
//!
//! ## Architecture
//! - App Layer - menu loop, prompts, the single last-request slot
//! - Network Layer - one-shot reqwest calls on a current-thread runtime
//! - Core - JSON formatter and code templates, pure functions of data

pub mod app;
pub mod codegen;
pub mod constants;
pub mod json;
pub mod logging;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppState, Shell};
pub use codegen::{render, render_all, Language};
pub use json::format_json;
pub use models::{split_header, Header, NetworkResponse, Request, Response};
pub use network::{ReqwestTransport, Transport};
pub use ui::{AnsiPalette, Palette, PlainPalette};
