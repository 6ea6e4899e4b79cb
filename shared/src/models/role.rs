//! Role Model

use serde::{Deserialize, Serialize};

/// Viewer role as seen by the client.
///
/// The server stores an open-ended role string; only `"admin"` grants the
/// admin capabilities, every other value is a regular user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    Regular,
}

impl Role {
    /// Map a server role string
    pub fn from_role_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Regular
        }
    }

    /// Map a legacy `is_admin` flag
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::Regular }
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}
