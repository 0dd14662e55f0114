//! Authenticated-user identity and roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Role of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Reports issues, upvotes, and comments.
    Citizen,
    /// Triages issues, assigns and reviews work orders.
    Official,
    /// Executes assigned work orders and submits proof.
    Worker,
    /// Manages departments and officials system-wide.
    Admin,
}

impl Role {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Official => "official",
            Self::Worker => "worker",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "citizen" => Ok(Self::Citizen),
            "official" => Ok(Self::Official),
            "worker" => Ok(Self::Worker),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing roles from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Identity of the authenticated user, as reported by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Opaque user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Granted role.
    pub role: Role,
}

impl CurrentUser {
    /// Creates an identity value.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    /// Returns `true` when the user holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::{CurrentUser, Role};
    use rstest::rstest;

    #[rstest]
    #[case("citizen", Role::Citizen)]
    #[case("  Official  ", Role::Official)]
    #[case("WORKER", Role::Worker)]
    #[case("admin", Role::Admin)]
    fn roles_parse_from_wire_values(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::try_from(raw).expect("known role"), expected);
    }

    #[rstest]
    fn unknown_roles_are_refused() {
        let error = Role::try_from("mayor").expect_err("unknown role");
        assert_eq!(error.0, "mayor");
    }

    #[rstest]
    fn a_user_holds_exactly_one_role() {
        let user = CurrentUser::new("official-1", "Jane Doe", Role::Official);
        assert!(user.has_role(Role::Official));
        assert!(!user.has_role(Role::Admin));
        assert!(!user.has_role(Role::Citizen));
    }
}
