//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP
//! responses. All errors implement `IntoResponse` to provide consistent
//! error formatting.

use crate::services::CipherError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error types
///
/// Validation failures and transformation faults are distinct variants,
/// propagated explicitly through handler return values rather than caught
/// at a generic boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request text was missing, empty, or whitespace-only
    #[error("Text cannot be empty.")]
    EmptyText,

    /// The cipher could not encrypt the input
    #[error("Encryption failed: {0}")]
    Encryption(#[source] CipherError),

    /// The cipher could not decrypt the input
    #[error("Decryption failed: {0}")]
    Decryption(#[source] CipherError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyText => StatusCode::BAD_REQUEST,
            AppError::Encryption(_) | AppError::Decryption(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
