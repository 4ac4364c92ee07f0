//! API module
//!
//! Contains HTTP request handlers for the cipher endpoints

pub mod cipher;
