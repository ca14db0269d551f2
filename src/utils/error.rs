//! Error handling for the tracker
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the tracker
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (bad calculation or request inputs)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors (unknown HS code, missing history)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog store read failures
    #[error("Store read error: {0}")]
    StoreRead(String),

    /// Catalog store write failures
    #[error("Store write error: {0}")]
    StoreWrite(String),

    /// Upstream tariff-schedule fetch failures (network, HTTP status, decode)
    #[error("{0}")]
    UpstreamFetch(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for TrackerError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            TrackerError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            TrackerError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            TrackerError::StoreRead(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_READ_ERROR",
                self.to_string(),
            ),
            TrackerError::StoreWrite(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_WRITE_ERROR",
                self.to_string(),
            ),
            TrackerError::UpstreamFetch(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_FETCH_ERROR",
                self.to_string(),
            ),
            TrackerError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            // Raw IO/serde/client detail never reaches API consumers
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl TrackerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store_read<S: Into<String>>(message: S) -> Self {
        Self::StoreRead(message.into())
    }

    pub fn store_write<S: Into<String>>(message: S) -> Self {
        Self::StoreWrite(message.into())
    }

    pub fn upstream_fetch<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFetch(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
