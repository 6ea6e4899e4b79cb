//! Authorization/visibility model
//!
//! Two declarative tables decide everything the viewer may see or press:
//! which page sections are visible for a role, and which catalog buttons a
//! subscription offers for a role and ownership state. Renderers consult
//! these tables and nothing else.

use std::collections::{BTreeSet, HashMap};

use shared::models::{Role, UserSubscription};

use super::Section;

/// Button attached to a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogAction {
    Edit,
    Delete,
    AssignToSelf,
    RequestAccess,
    /// Pre-fills the pay form with the item's id and price
    Pay,
}

impl CatalogAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::AssignToSelf => "Assign to self",
            Self::RequestAccess => "Request access",
            Self::Pay => "Pay",
        }
    }
}

/// Viewer's relation to one catalog subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Unowned,
    Inactive,
    Active,
}

/// Ownership records keyed by subscription id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipIndex {
    active_by_subscription: HashMap<i64, bool>,
}

impl OwnershipIndex {
    /// Index the viewer's ownership list. The first record for a
    /// subscription wins when the server returns duplicates.
    pub fn from_records(records: &[UserSubscription]) -> Self {
        let mut active_by_subscription = HashMap::with_capacity(records.len());
        for record in records {
            active_by_subscription
                .entry(record.subscription_id)
                .or_insert(record.is_active);
        }
        Self {
            active_by_subscription,
        }
    }

    pub fn ownership(&self, subscription_id: i64) -> Ownership {
        match self.active_by_subscription.get(&subscription_id) {
            None => Ownership::Unowned,
            Some(false) => Ownership::Inactive,
            Some(true) => Ownership::Active,
        }
    }
}

/// Who is looking at the catalog.
///
/// A regular viewer can only be built from a fetched ownership index, so
/// no button can be decided before the ownership list has arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Admin,
    Regular(OwnershipIndex),
}

impl Viewer {
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Regular(_) => Role::Regular,
        }
    }

    /// Buttons offered on one catalog item
    pub fn actions_for(&self, subscription_id: i64) -> &'static [CatalogAction] {
        let ownership = match self {
            Self::Admin => None,
            Self::Regular(index) => Some(index.ownership(subscription_id)),
        };
        allowed_actions(self.role(), ownership)
    }
}

struct Capability {
    role: Role,
    /// `None` matches any ownership state
    ownership: Option<Ownership>,
    actions: &'static [CatalogAction],
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        role: Role::Admin,
        ownership: None,
        actions: &[
            CatalogAction::Edit,
            CatalogAction::Delete,
            CatalogAction::AssignToSelf,
        ],
    },
    Capability {
        role: Role::Regular,
        ownership: Some(Ownership::Unowned),
        actions: &[CatalogAction::RequestAccess],
    },
    Capability {
        role: Role::Regular,
        ownership: Some(Ownership::Inactive),
        actions: &[CatalogAction::Pay],
    },
    Capability {
        role: Role::Regular,
        ownership: Some(Ownership::Active),
        actions: &[],
    },
];

/// Look up the capability table
pub fn allowed_actions(role: Role, ownership: Option<Ownership>) -> &'static [CatalogAction] {
    CAPABILITIES
        .iter()
        .find(|c| c.role == role && (c.ownership.is_none() || c.ownership == ownership))
        .map(|c| c.actions)
        .unwrap_or(&[])
}

const SIGNED_OUT_SECTIONS: &[Section] = &[Section::LoginForm, Section::RegisterForm];

const SIGNED_IN_SECTIONS: &[Section] = &[Section::LogoutButton, Section::Subscriptions];

const ADMIN_SECTIONS: &[Section] = &[Section::AdminPanel, Section::RequestQueue];

const REGULAR_SECTIONS: &[Section] = &[
    Section::WalletSection,
    Section::PaymentHistory,
    Section::PayForm,
    Section::Notifications,
];

/// Sections of the logged-out page
pub fn signed_out_sections() -> BTreeSet<Section> {
    SIGNED_OUT_SECTIONS.iter().copied().collect()
}

/// Sections right after login. The two role branches are disjoint.
pub fn signed_in_sections(role: Role) -> BTreeSet<Section> {
    let role_sections = match role {
        Role::Admin => ADMIN_SECTIONS,
        Role::Regular => REGULAR_SECTIONS,
    };
    SIGNED_IN_SECTIONS
        .iter()
        .chain(role_sections)
        .copied()
        .collect()
}
