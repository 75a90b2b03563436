//! HTTPX - interactive HTTP client
//!
//! Menu-driven: configure a request, send it, view it again or turn it into
//! code for another language.

use std::io;

use httpx::constants::LOG_FILE;
use httpx::{AnsiPalette, ReqwestTransport, Shell};

fn main() -> anyhow::Result<()> {
    // Log to a file so traces never mix with the prompts
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    httpx::logging::init(non_blocking)?;

    tracing::info!(version = httpx::constants::APP_VERSION, "Starting");

    let transport = ReqwestTransport::new()?;
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), transport, Box::new(AnsiPalette));
    shell.run()?;

    Ok(())
}
