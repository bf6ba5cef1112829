use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Static file server over the feed output directory.
///
/// A passive reader: it serves whatever the scheduler last wrote and
/// computes nothing per request.
pub struct StaticServer {
    server: Arc<Server>,
    handle: JoinHandle<()>,
}

/// Binds the listening socket and starts the accept loop.
///
/// A bind failure is fatal at startup; the caller propagates it.
pub fn bind(port: u16, root: PathBuf) -> Result<StaticServer> {
    let server = Server::http(("0.0.0.0", port))
        .map_err(|err| anyhow::anyhow!("failed to bind port {port}: {err}"))?;
    let server = Arc::new(server);
    log::info!("serving {} on http://0.0.0.0:{port}", root.display());

    let accept = Arc::clone(&server);
    let handle = thread::spawn(move || accept_loop(&accept, &root));

    Ok(StaticServer { server, handle })
}

impl StaticServer {
    /// The bound address; useful when binding to an ephemeral port.
    pub fn addr(&self) -> Option<std::net::SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Stops accepting connections, ends the accept loop, joins the thread.
    pub fn stop(self) {
        self.server.unblock();
        let _ = self.handle.join();
    }
}

fn accept_loop(server: &Server, root: &Path) {
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, root) {
            log::warn!("request error: {err}");
        }
    }
    log::info!("server stopped");
}

fn handle_request(request: Request, root: &Path) -> Result<()> {
    if !matches!(request.method(), Method::Get | Method::Head) {
        return request
            .respond(Response::empty(StatusCode(405)))
            .map_err(Into::into);
    }

    let head = request.method() == &Method::Head;
    match resolve_path(root, request.url()) {
        Some(path) if path.is_file() => respond_file(request, &path, head),
        _ => respond_not_found(request, head),
    }
}

fn respond_file(request: Request, path: &Path, head: bool) -> Result<()> {
    let content_type = content_type_for(path);
    if head {
        let response = Response::empty(StatusCode(200)).with_header(content_type_header(content_type));
        return request.respond(response).map_err(Into::into);
    }

    let body = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let response = Response::from_data(body).with_header(content_type_header(content_type));
    request.respond(response)?;
    Ok(())
}

fn respond_not_found(request: Request, head: bool) -> Result<()> {
    if head {
        return request
            .respond(Response::empty(StatusCode(404)))
            .map_err(Into::into);
    }
    let response =
        Response::from_data(b"404 Not Found".to_vec()).with_status_code(StatusCode(404));
    request.respond(response)?;
    Ok(())
}

/// Maps a request URL onto a file strictly inside the output directory.
fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let relative = Path::new(trimmed);
    // Reject anything that could escape the root.
    if relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return None;
    }

    Some(root.join(relative))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("atom") => "application/atom+xml; charset=utf-8",
        Some("rss") => "application/rss+xml; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn content_type_header(value: &'static str) -> Header {
    Header::from_bytes("Content-Type", value).unwrap()
}
