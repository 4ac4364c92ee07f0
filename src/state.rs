//! Application state management
//!
//! Holds the configured cipher service, shared read-only across requests.
//! Nothing in here is mutable after startup, so handlers share it behind a
//! plain `Arc` with no locking.

use crate::services::ShiftCipher;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The cipher constructed from configuration at startup
    pub cipher: ShiftCipher,
}

impl AppState {
    /// Create application state around a configured cipher
    pub fn new(cipher: ShiftCipher) -> Self {
        Self { cipher }
    }
}
