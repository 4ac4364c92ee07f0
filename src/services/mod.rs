//! Service layer
//!
//! Pure transformation services used by the API handlers.

pub mod cipher;

pub use cipher::{CipherError, ShiftCipher, DEFAULT_SHIFT};
