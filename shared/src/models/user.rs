//! User Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Role;

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Authenticated user profile.
///
/// Decodes both profile shapes in the wild: `{"role": "admin"}` and the
/// older `{"is_admin": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCurrentUser")]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub balance: Option<Decimal>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Deserialize)]
struct RawCurrentUser {
    id: i64,
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    is_admin: Option<bool>,
    #[serde(default)]
    balance: Option<Decimal>,
}

impl From<RawCurrentUser> for CurrentUser {
    fn from(raw: RawCurrentUser) -> Self {
        // An explicit role string wins over the legacy flag
        let role = match (raw.role.as_deref(), raw.is_admin) {
            (Some(name), _) => Role::from_role_name(name),
            (None, Some(flag)) => Role::from_admin_flag(flag),
            (None, None) => Role::Regular,
        };
        Self {
            id: raw.id,
            username: raw.username,
            email: raw.email,
            role,
            balance: raw.balance,
        }
    }
}
