//! Network layer - one-shot HTTP request execution
//!
//! The shell only sees the [`Transport`] trait; the reqwest-backed
//! implementation drives its own single-threaded tokio runtime.

pub mod client;

pub use client::{ReqwestTransport, Transport};
