//! Secret handling utilities.
//!
//! Re-exports secrecy types so callers can read the API key and connection
//! string without depending on secrecy directly.

pub use secrecy::{ExposeSecret, SecretString};
