use serde::{Deserialize, Serialize};
use std::fmt;

use super::Member;

/// Role identifier within a project, e.g. `project:editor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub role: Role,
    pub licensed: bool,
}

impl RoleInfo {
    pub fn new(role: Role, licensed: bool) -> Self {
        Self { role, licensed }
    }
}

/// Ordered list of the roles a project member can hold, as reported by the
/// licensing capability source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRoles(Vec<RoleInfo>);

impl ProjectRoles {
    pub fn new(roles: Vec<RoleInfo>) -> Self {
        Self(roles)
    }

    pub fn is_licensed(&self, role: &Role) -> bool {
        self.0.iter().any(|info| &info.role == role && info.licensed)
    }

    /// Role stored on a freshly added member: the first licensed role, if
    /// the plan has one.
    pub fn default_for_new_member(&self) -> Option<Role> {
        self.0
            .iter()
            .find(|info| info.licensed)
            .map(|info| info.role.clone())
    }

    /// Role to show for a member. Falls back to the first available role
    /// when none is assigned; the fallback is never written back.
    pub fn display_role<'a>(&'a self, member: &'a Member) -> Option<&'a Role> {
        member
            .role
            .as_ref()
            .or_else(|| self.0.first().map(|info| &info.role))
    }
}
