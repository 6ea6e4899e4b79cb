//! Shared types for the KinoSub client
//!
//! Wire models and request/response DTOs of the KinoSub REST API,
//! kept free of any HTTP client so they can be reused by other front ends.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{TokenRequest, TokenResponse};
pub use response::ErrorDetail;
