//! # API Error Type
//!
//! Transport-level errors for backend calls.
//!
//! ## Error Handling Strategy
//! Only genuine transport/contract failures become `ApiError`. A backend
//! that answers `{"success": false, "message": ...}` is a *logical*
//! outcome, modeled as [`crate::api::OrderOutcome::Rejected`], not an
//! error — the distinction drives which notification the user sees.

use thiserror::Error;

/// Errors raised by the HTTP backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself failed: connection refused, timeout, TLS
    /// failure, non-2xx status or an undecodable body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 2xx but the payload violates the contract
    /// (e.g. a successful order without an order id).
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
