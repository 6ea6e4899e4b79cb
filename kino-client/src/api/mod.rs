//! Typed KinoSub API
//!
//! One method per endpoint. Methods only move records in and out; deciding
//! what to show is the view layer's job.

mod auth;
mod notifications;
mod payments;
mod requests;
mod subscriptions;
mod wallet;

pub use requests::RequestDecision;

use crate::config::Backend;
use crate::http::{HttpClient, NetworkHttpClient};

/// Typed API over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct Api<H = NetworkHttpClient> {
    http: H,
    backend: Backend,
}

impl<H: HttpClient> Api<H> {
    pub fn new(http: H, backend: Backend) -> Self {
        Self { http, backend }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Attach or drop the bearer token used by authenticated calls
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}
