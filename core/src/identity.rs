//! Viewer identity.
//!
//! The desk never reads session state on its own. Whoever drives it
//! hands in an `IdentityProvider`; the filter scope rule only looks at
//! `Viewer::name` and `Viewer::role`.

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }
}

/// A row of the user directory. Credentials are not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id:         String,
    pub name:       String,
    pub email:      String,
    pub department: String,
    pub role:       Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address:    Option<String>,
}

impl UserRecord {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            name:       self.name.clone(),
            role:       self.role,
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn by_name(&self, name: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Emails compare case-insensitively.
    pub fn by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn viewer_named(&self, name: &str) -> DeskResult<Viewer> {
        self.by_name(name)
            .map(UserRecord::viewer)
            .ok_or_else(|| DeskError::UnknownViewer { name: name.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }
}

/// The identity the desk renders for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub name:       String,
    pub role:       Role,
    pub department: String,
}

impl Viewer {
    pub fn new(name: impl Into<String>, role: Role, department: impl Into<String>) -> Self {
        Self { name: name.into(), role, department: department.into() }
    }

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

/// Supplies the current viewer. `None` means nobody is signed in; the
/// caller redirects rather than asking the desk to cope.
pub trait IdentityProvider {
    fn current_viewer(&self) -> Option<Viewer>;
}

/// Fixed identity, used by the runner and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    viewer: Option<Viewer>,
}

impl StaticIdentity {
    pub fn signed_in(viewer: Viewer) -> Self {
        Self { viewer: Some(viewer) }
    }

    pub fn signed_out() -> Self {
        Self { viewer: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_viewer(&self) -> Option<Viewer> {
        self.viewer.clone()
    }
}
