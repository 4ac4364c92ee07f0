//! Cipher API handlers
//!
//! Contains HTTP request handlers for the encrypt and decrypt endpoints.
//! Each route exists in a GET form (text in the path) and a POST form
//! (text in a JSON body); both share the same validation and error mapping.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cipher request body for the POST routes
#[derive(Debug, Deserialize)]
pub struct CipherRequest {
    /// Text to transform
    #[serde(default)]
    pub text: String,
}

/// Successful encrypt response
#[derive(Debug, Serialize)]
pub struct EncryptResponse {
    /// The shifted text
    #[serde(rename = "encryptedText")]
    pub encrypted_text: String,
}

/// Successful decrypt response
#[derive(Debug, Serialize)]
pub struct DecryptResponse {
    /// The unshifted text
    #[serde(rename = "decryptedText")]
    pub decrypted_text: String,
}

/// GET /encrypt/:text - Encrypt a path segment
pub async fn encrypt_path(
    State(state): State<Arc<AppState>>,
    Path(text): Path<String>,
) -> Result<Json<EncryptResponse>, AppError> {
    encrypt(&state, &text)
}

/// GET /decrypt/:text - Decrypt a path segment
pub async fn decrypt_path(
    State(state): State<Arc<AppState>>,
    Path(text): Path<String>,
) -> Result<Json<DecryptResponse>, AppError> {
    decrypt(&state, &text)
}

/// POST /encrypt - Encrypt the text field of a JSON body
pub async fn encrypt_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CipherRequest>,
) -> Result<Json<EncryptResponse>, AppError> {
    encrypt(&state, &request.text)
}

/// POST /decrypt - Decrypt the text field of a JSON body
pub async fn decrypt_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CipherRequest>,
) -> Result<Json<DecryptResponse>, AppError> {
    decrypt(&state, &request.text)
}

fn encrypt(state: &AppState, text: &str) -> Result<Json<EncryptResponse>, AppError> {
    validate_text(text)?;
    let encrypted_text = state.cipher.encrypt(text).map_err(AppError::Encryption)?;
    Ok(Json(EncryptResponse { encrypted_text }))
}

fn decrypt(state: &AppState, text: &str) -> Result<Json<DecryptResponse>, AppError> {
    validate_text(text)?;
    let decrypted_text = state.cipher.decrypt(text).map_err(AppError::Decryption)?;
    Ok(Json(DecryptResponse { decrypted_text }))
}

// Helper function to validate request text
fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyText);
    }
    Ok(())
}
