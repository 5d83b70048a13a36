//! Framework-agnostic routing
//!
//! Maps `(method, path)` to API handlers, applies the CORS policy and turns
//! handler results into status/headers/body triples. The `tiny_http`
//! adapter only moves bytes in and out.

use std::sync::Arc;

use log::{debug, error};
use serde::Serialize;

use crate::api::{self, ApiError, ErrorBody};
use crate::config::ServerConfig;
use crate::core::ports::Solver;

/// A response ready to be written by an HTTP adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Look up a header value (case-insensitive name)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Immutable per-process routing state shared by all workers
pub struct Router {
    config: Arc<ServerConfig>,
    solver: Arc<dyn Solver>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Router {
    /// Create a router over a config and a solver
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, solver: Arc<dyn Solver>) -> Self {
        Self { config, solver }
    }

    /// Route one request
    ///
    /// `url` may carry a query string, which is ignored.
    pub fn handle(
        &self,
        method: &str,
        url: &str,
        origin: Option<&str>,
        body: Option<&str>,
    ) -> HttpReply {
        let path = url.split_once('?').map_or(url, |(p, _)| p);
        debug!("{method} {path}");

        let reply = match (method, path) {
            ("OPTIONS", _) => return self.preflight(origin),

            ("POST", "/solve") => {
                Self::result_reply(api::solve_body(self.solver.as_ref(), body))
            },
            ("GET", "/health") => json_reply(200, &api::health()),

            (_, "/solve" | "/health") => Self::error_reply(&ApiError::method_not_allowed(format!(
                "Method {method} not allowed for {path}"
            ))),
            _ => Self::error_reply(&ApiError::not_found(format!(
                "Endpoint not found: {method} {path}"
            ))),
        };

        self.with_cors(reply, origin)
    }

    /// Reply for a fault outside the validate/solve pipeline
    pub fn internal_error(&self, origin: Option<&str>, detail: &str) -> HttpReply {
        error!("internal error: {detail}");
        self.with_cors(Self::error_reply(&ApiError::internal(detail)), origin)
    }

    /// Reply for a body the adapter could not read as text
    pub fn unreadable_body(&self, origin: Option<&str>, detail: &str) -> HttpReply {
        self.with_cors(
            Self::error_reply(&ApiError::malformed(format!(
                "Failed to read request body: {detail}"
            ))),
            origin,
        )
    }

    fn result_reply<T: Serialize>(result: Result<T, ApiError>) -> HttpReply {
        match result {
            Ok(data) => json_reply(200, &data),
            Err(e) => Self::error_reply(&e),
        }
    }

    fn error_reply(err: &ApiError) -> HttpReply {
        if err.status_code() >= 500 {
            error!("{err}");
        } else {
            debug!("{err}");
        }
        json_reply(err.status_code(), &ErrorBody::from(err))
    }

    fn preflight(&self, origin: Option<&str>) -> HttpReply {
        let mut reply = HttpReply {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        };
        if origin.is_some_and(|o| self.config.cors.allows(o)) {
            let cors = &self.config.cors;
            reply.headers.push((
                "Access-Control-Allow-Methods".to_string(),
                cors.methods.join(", "),
            ));
            reply.headers.push((
                "Access-Control-Allow-Headers".to_string(),
                cors.headers.join(", "),
            ));
        }
        self.with_cors(reply, origin)
    }

    fn with_cors(&self, mut reply: HttpReply, origin: Option<&str>) -> HttpReply {
        let Some(origin) = origin.filter(|o| self.config.cors.allows(o)) else {
            return reply;
        };

        reply.headers.push((
            "Access-Control-Allow-Origin".to_string(),
            origin.to_string(),
        ));
        reply.headers.push(("Vary".to_string(), "Origin".to_string()));
        if self.config.cors.supports_credentials {
            reply.headers.push((
                "Access-Control-Allow-Credentials".to_string(),
                "true".to_string(),
            ));
        }
        reply
    }
}

fn json_reply<T: Serialize>(status: u16, data: &T) -> HttpReply {
    let (status, body) = match serde_json::to_vec(data) {
        Ok(body) => (status, body),
        Err(e) => {
            error!("failed to serialize response: {e}");
            let fallback = ErrorBody::from(&ApiError::internal(e.to_string()));
            (
                500,
                serde_json::to_vec(&fallback).unwrap_or_else(|_| b"{}".to_vec()),
            )
        },
    };

    HttpReply {
        status,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body,
    }
}
