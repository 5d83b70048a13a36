//! Server configuration
//!
//! Loaded once at startup from TOML and shared read-only with every worker.
//! Every field has a default, so an empty file (or no file) is a working
//! configuration.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5001
//! workers = 4
//!
//! [cors]
//! origins = ["http://localhost:3000", "http://localhost:3001"]
//! methods = ["GET", "POST", "OPTIONS"]
//! headers = ["Content-Type", "Authorization"]
//! supports_credentials = false
//!
//! [solver]
//! program = "kociemba"
//! args = []
//! unreachable_exit_code = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ListenConfig,
    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
    /// External solver
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of request worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5001
}

const fn default_workers() -> usize {
    4
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

/// Cross-origin resource sharing policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API (`*` allows any)
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
    /// Methods advertised in preflight responses
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
    /// Request headers advertised in preflight responses
    #[serde(default = "default_headers")]
    pub headers: Vec<String>,
    /// Whether to send `Access-Control-Allow-Credentials: true`
    #[serde(default)]
    pub supports_credentials: bool,
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3001".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()]
}

fn default_headers() -> Vec<String> {
    vec!["Content-Type".to_string(), "Authorization".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
            methods: default_methods(),
            headers: default_headers(),
            supports_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Whether a request `Origin` is allowed
    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == "*" || o == origin)
    }
}

/// External solver executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Executable to run
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the cube string
    #[serde(default)]
    pub args: Vec<String>,
    /// Exit status meaning "cube state is physically impossible"
    #[serde(default)]
    pub unreachable_exit_code: Option<i32>,
}

fn default_program() -> String {
    "kociemba".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            unreachable_exit_code: None,
        }
    }
}

impl ServerConfig {
    /// Load config from the resolved path, or defaults when there is none
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match paths::resolve_config(explicit) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid(
                "server.workers must be at least 1".to_string(),
            ));
        }
        if self.solver.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "solver.program must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        workers: Option<usize>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(workers) = workers {
            self.server.workers = workers;
        }
        self
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
