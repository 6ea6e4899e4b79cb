//! Kino Client - subscription and wallet client for the KinoSub API
//!
//! Typed HTTP calls, a persisted session and a front-end independent page
//! model driven by [`ViewController`].

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod session;
pub mod view;

pub use api::{Api, RequestDecision};
pub use config::{Backend, ClientConfig, ConfigError};
pub use controller::ViewController;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore, TokenStoreError};
pub use view::{Notice, Prompter, ScriptedPrompter, Section, ViewState};

// Re-export shared models for front ends
pub use shared::models;
