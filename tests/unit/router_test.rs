//! Tests for the router
//!
//! Drives `Router::handle` with scripted solvers and raw JSON bodies.

use std::sync::Arc;

use serde_json::Value;

use cubesolve::config::ServerConfig;
use cubesolve::core::models::SOLVED;
use cubesolve::server::{HttpReply, Router};

use crate::common::{FakeSolver, SCRAMBLED, SCRAMBLED_SOLUTION, flipped_edge, solve_body};

fn router_with(solver: Arc<FakeSolver>, config: ServerConfig) -> Router {
    Router::new(Arc::new(config), solver)
}

fn standard() -> (Router, Arc<FakeSolver>) {
    let solver = Arc::new(FakeSolver::standard());
    (router_with(Arc::clone(&solver), ServerConfig::default()), solver)
}

fn json(reply: &HttpReply) -> Value {
    serde_json::from_slice(&reply.body).unwrap()
}

fn post_solve(router: &Router, body: &str) -> HttpReply {
    router.handle("POST", "/solve", None, Some(body))
}

// =============================================================================
// SOLVE
// =============================================================================

#[test]
fn test_solve_scramble() {
    let (router, _) = standard();
    let reply = post_solve(&router, &solve_body(SCRAMBLED));
    assert_eq!(reply.status, 200);
    assert_eq!(reply.header("Content-Type"), Some("application/json"));

    let body = json(&reply);
    assert_eq!(body["solution"], SCRAMBLED_SOLUTION);
    assert_eq!(body["moves"], 19);
    assert!(body["time"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_solve_missing_body() {
    let (router, solver) = standard();
    let reply = router.handle("POST", "/solve", None, None);
    assert_eq!(reply.status, 400);
    let body = json(&reply);
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(body["code"], "MALFORMED_REQUEST");
    assert_eq!(solver.calls(), 0);
}

#[test]
fn test_solve_missing_field() {
    let (router, solver) = standard();
    let reply = post_solve(&router, r#"{"cube": "UUU"}"#);
    assert_eq!(reply.status, 400);
    assert_eq!(json(&reply)["details"], "Missing 'cubeString' field in request body");
    assert_eq!(solver.calls(), 0);
}

#[test]
fn test_solve_wrong_length() {
    let (router, solver) = standard();
    let reply = post_solve(&router, &solve_body(&SOLVED[..53]));
    assert_eq!(reply.status, 400);
    let body = json(&reply);
    assert_eq!(body["error"], "Invalid cube string");
    assert_eq!(body["details"], "Cube string must be exactly 54 characters, got 53");
    assert_eq!(solver.calls(), 0);
}

#[test]
fn test_solve_unreachable_state() {
    let (router, solver) = standard();
    let reply = post_solve(&router, &solve_body(&flipped_edge()));
    assert_eq!(reply.status, 400);
    let body = json(&reply);
    assert_eq!(body["error"], "Invalid cube state");
    assert_eq!(body["code"], "INVALID_CUBE_STATE");
    assert_eq!(solver.calls(), 1);
}

#[test]
fn test_solve_failure() {
    let solver = Arc::new(FakeSolver::new());
    let router = router_with(solver, ServerConfig::default());
    let reply = post_solve(&router, &solve_body(SCRAMBLED));
    assert_eq!(reply.status, 400);
    let body = json(&reply);
    assert_eq!(body["error"], "Cube solving failed");
    assert_eq!(body["details"], "no scripted answer");
}

// =============================================================================
// ROUTING
// =============================================================================

#[test]
fn test_health() {
    let (router, solver) = standard();
    let reply = router.handle("GET", "/health", None, None);
    assert_eq!(reply.status, 200);
    let body = json(&reply);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], cubesolve::VERSION);
    assert_eq!(solver.calls(), 0);
}

#[test]
fn test_unknown_path() {
    let (router, _) = standard();
    let reply = router.handle("POST", "/solver", None, Some("{}"));
    assert_eq!(reply.status, 404);
    assert_eq!(json(&reply)["code"], "NOT_FOUND");
}

#[test]
fn test_wrong_methods() {
    let (router, solver) = standard();
    for (method, path) in [("GET", "/solve"), ("PUT", "/solve"), ("POST", "/health")] {
        let reply = router.handle(method, path, None, None);
        assert_eq!(reply.status, 405, "{method} {path}");
        assert_eq!(json(&reply)["code"], "METHOD_NOT_ALLOWED");
    }
    assert_eq!(solver.calls(), 0);
}

// =============================================================================
// CORS
// =============================================================================

#[test]
fn test_cors_on_errors_too() {
    let (router, _) = standard();
    let reply = router.handle("POST", "/solve", Some("http://localhost:3001"), Some("nope"));
    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.header("Access-Control-Allow-Origin"),
        Some("http://localhost:3001")
    );
}

#[test]
fn test_no_origin_no_cors() {
    let (router, _) = standard();
    let reply = router.handle("GET", "/health", None, None);
    assert_eq!(reply.header("Access-Control-Allow-Origin"), None);
}

#[test]
fn test_preflight_for_unknown_origin() {
    let (router, _) = standard();
    let reply = router.handle("OPTIONS", "/solve", Some("http://evil.example"), None);
    assert_eq!(reply.status, 204);
    assert_eq!(reply.header("Access-Control-Allow-Origin"), None);
    assert_eq!(reply.header("Access-Control-Allow-Methods"), None);
}

#[test]
fn test_credentials_header() {
    let mut config = ServerConfig::default();
    config.cors.supports_credentials = true;
    config.cors.origins = vec!["https://cube.example".to_string()];
    let router = router_with(Arc::new(FakeSolver::standard()), config);

    let reply = router.handle("GET", "/health", Some("https://cube.example"), None);
    assert_eq!(reply.header("Access-Control-Allow-Credentials"), Some("true"));

    let reply = router.handle("GET", "/health", Some("http://localhost:3000"), None);
    assert_eq!(reply.header("Access-Control-Allow-Credentials"), None);
}

#[test]
fn test_unreadable_body_is_malformed() {
    let (router, _) = standard();
    let reply = router.unreadable_body(None, "stream did not contain valid UTF-8");
    assert_eq!(reply.status, 400);
    assert_eq!(json(&reply)["code"], "MALFORMED_REQUEST");
}
