//! Local preview server for the output directory.

mod path;
mod response;

use crate::{config::SiteConfig, debug, log};
use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Serve `build.output` until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let addr = SocketAddr::new(config.serve.interface, config.serve.port);
    let server =
        Arc::new(Server::http(addr).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?);

    // Ctrl+C unblocks `incoming_requests` so the loop ends cleanly
    let handle = Arc::clone(&server);
    ctrlc::set_handler(move || handle.unblock()).context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &config.build.output) {
            log!("serve"; "request error: {e}");
        }
    }

    log!("serve"; "stopped");
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, output: &Path) -> Result<()> {
    debug!("serve"; "{} {}", request.method(), request.url());

    if !response::is_read_request(&request) {
        return response::respond_method_not_allowed(request);
    }

    match path::resolve_path(request.url(), output) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request, output),
    }
}
