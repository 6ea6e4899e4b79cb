//! Data models
//!
//! Client-side copies of the server's records. The server owns every one of
//! them; the client only decodes, renders and sends payloads back.
//! All IDs are `i64`, money is `Decimal` on the wire as a JSON number.

pub mod notification;
pub mod payment;
pub mod role;
pub mod subscription;
pub mod subscription_request;
pub mod user;
pub mod user_subscription;
pub mod wallet;

// Re-exports
pub use notification::*;
pub use payment::*;
pub use role::*;
pub use subscription::*;
pub use subscription_request::*;
pub use user::*;
pub use user_subscription::*;
pub use wallet::*;
