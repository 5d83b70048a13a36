//! tiny_http server adapter
//!
//! Handles body reading, response conversion and the worker pool. A fixed
//! number of threads pull requests from one shared listener, so the pool
//! size bounds how many solves run at once.

use std::io::{Cursor, ErrorKind};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::core::services::panic_message;

use super::router::{HttpReply, Router};

// =============================================================================
// LISTENER
// =============================================================================

/// Bind a listener on `addr` (`host:port`; port 0 picks a free port)
pub fn bind(addr: &str) -> anyhow::Result<Arc<Server>> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    Ok(Arc::new(server))
}

/// Start `workers` threads serving requests from `server`
///
/// Threads exit when the listener is unblocked or fails.
pub fn spawn_workers(
    server: &Arc<Server>,
    router: &Arc<Router>,
    workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..workers.max(1))
        .map(|id| {
            let server = Arc::clone(server);
            let router = Arc::clone(router);
            thread::Builder::new()
                .name(format!("cubesolve-worker-{id}"))
                .spawn(move || worker_loop(id, &server, &router))
        })
        .filter_map(|spawned| match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("failed to spawn worker: {e}");
                None
            },
        })
        .collect()
}

/// Serve until every worker exits
pub fn serve(server: &Arc<Server>, router: &Arc<Router>, workers: usize) -> anyhow::Result<()> {
    let handles = spawn_workers(server, router, workers);
    if handles.is_empty() {
        anyhow::bail!("no worker threads could be started");
    }
    info!("serving with {} worker(s)", handles.len());

    for handle in handles {
        if handle.join().is_err() {
            error!("worker thread panicked");
        }
    }
    Ok(())
}

fn worker_loop(id: usize, server: &Server, router: &Router) {
    debug!("worker {id} started");
    loop {
        let mut request = match server.recv() {
            Ok(request) => request,
            Err(e) => {
                debug!("worker {id} stopping: {e}");
                break;
            },
        };

        let response = handle_request(router, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("failed to write response: {e}");
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one request, converting panics into 500 responses
pub fn handle_request(router: &Router, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().to_string();
    let url = request.url().to_string();
    let origin = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Origin"))
        .map(|h| h.value.as_str().to_string());
    let origin = origin.as_deref();

    let reply = match read_body(request) {
        Ok(body) => {
            let body = (!body.is_empty()).then_some(body.as_str());
            catch_unwind(AssertUnwindSafe(|| router.handle(&method, &url, origin, body)))
                .unwrap_or_else(|panic| router.internal_error(origin, &panic_message(&*panic)))
        },
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            router.unreadable_body(origin, &e.to_string())
        },
        Err(e) => router.internal_error(origin, &format!("Failed to read request body: {e}")),
    };

    to_response(reply)
}

fn read_body(request: &mut Request) -> std::io::Result<String> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    Ok(body)
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn to_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let headers = reply
        .headers
        .iter()
        .filter_map(|(name, value)| Header::from_bytes(name.as_bytes(), value.as_bytes()).ok());

    let mut response = Response::from_data(reply.body).with_status_code(StatusCode(reply.status));
    for header in headers {
        response.add_header(header);
    }
    response
}
