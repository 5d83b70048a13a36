//! HTTP server
//!
//! - `router` - Framework-agnostic routing, CORS and response shaping
//! - `tiny_http` - Listener, worker pool and byte-level conversion

pub mod router;
pub mod tiny_http;

pub use router::{HttpReply, Router};
