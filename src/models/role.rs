use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User roles with ascending privilege levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only guest access
    Guest,
    /// Standard authenticated user
    #[default]
    User,
    /// Moderator with elevated permissions
    Moderator,
    /// Full administrative access
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    /// Whether this role meets the minimum required level
    pub fn has_permission(&self, required: Role) -> bool {
        *self >= required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_case_insensitively() {
        assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("MODERATOR".parse::<Role>(), Ok(Role::Moderator));
        assert_eq!("MOD".parse::<Role>(), Err(UnknownRole("MOD".to_string())));
        assert!("administrator".parse::<Role>().is_err());
        assert_eq!("guest".parse::<Role>(), Ok(Role::Guest));
        assert_eq!("root".parse::<Role>(), Err(UnknownRole("root".to_string())));
    }

    #[test]
    fn permission_follows_privilege_order() {
        assert!(Role::Admin.has_permission(Role::Moderator));
        assert!(Role::User.has_permission(Role::User));
        assert!(!Role::Guest.has_permission(Role::User));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"moderator\"");
        assert_eq!(Role::default(), Role::User);
    }
}
