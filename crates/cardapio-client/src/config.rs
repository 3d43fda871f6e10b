//! # API Configuration
//!
//! Base-URL resolution and endpoint paths.
//!
//! ## Environment Detection
//! Exactly two environments are recognized, resolved once at startup from
//! the page's host name: a local development backend and the deployed
//! production backend. There is no config file; the host name is the
//! single source of truth, matching how the page is served.

use std::time::Duration;

/// Base URL of the local development backend.
pub const LOCAL_BASE_URL: &str = "http://localhost:5000";

/// Base URL of the deployed production backend.
pub const PRODUCTION_BASE_URL: &str = "https://web-production-5220.up.railway.app";

/// Default timeout applied to every backend request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend endpoint paths, as the production backend serves them.
pub mod endpoints {
    pub const CATEGORIES: &str = "/api/categorias";
    pub const PRODUCTS: &str = "/api/produtos";
    pub const TABLES: &str = "/api/mesas";
    pub const SUBMIT_ORDER: &str = "/api/fazer_pedido";
}

// =============================================================================
// Environment
// =============================================================================

/// The two recognized deployment environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// Resolves the environment from the page's host name.
    ///
    /// `localhost` and `127.0.0.1` mean local development; anything else
    /// is production.
    pub fn detect(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" => Environment::Local,
            _ => Environment::Production,
        }
    }

    /// Fixed base URL for this environment.
    pub const fn base_url(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

// =============================================================================
// ApiConfig
// =============================================================================

/// Resolved backend configuration handed to the HTTP client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Builds a configuration with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Builds the configuration for the environment serving `hostname`.
    pub fn for_host(hostname: &str) -> Self {
        ApiConfig::new(Environment::detect(hostname).base_url())
    }

    /// Joins the base URL with an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
