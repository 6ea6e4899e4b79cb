//! What the page shows
//!
//! - [`capability`]: role and ownership tables
//! - [`state`]: the page model a front end draws
//! - [`render`]: records to view items
//! - [`prompt`]: dialogs raised by catalog actions

pub mod capability;
pub mod prompt;
pub mod render;
pub mod state;

pub use capability::{CatalogAction, Ownership, OwnershipIndex, Viewer};
pub use prompt::{Prompter, ScriptedPrompter};
pub use state::{
    CatalogItem, Forms, Notice, NotificationItem, RequestQueueView, RequestRow, Section,
    ViewState,
};
