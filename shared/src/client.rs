//! Auth DTOs shared between the API layer and front ends
//!
//! The token endpoint follows the OAuth2 password flow: credentials go out
//! form-encoded, the bearer token comes back as JSON.

use serde::{Deserialize, Serialize};

/// Form-encoded login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Token endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
