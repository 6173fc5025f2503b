//! The closed role set.
//!
//! The source data model attached roles to users through a nullable foreign
//! key, which made "user without a resolvable role" a reachable state every
//! handler had to defend against. Here the role is a closed enum carried on
//! the user row itself; the `roles` table survives only as a display and
//! description store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a system user. Stored as TEXT using the exact `Display` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rol {
    /// Manages user accounts.
    Administrador,
    /// Reviews ratings and exports CSV reports.
    Auditor,
    /// Creates ratings and edits their factors while pending.
    Corredor,
}

impl Rol {
    /// All roles, in the order they are presented in role filters.
    pub const ALL: [Rol; 3] = [Rol::Administrador, Rol::Corredor, Rol::Auditor];

    /// The stored/wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Administrador => "Administrador",
            Rol::Auditor => "Auditor",
            Rol::Corredor => "Corredor",
        }
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role strings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rol desconocido: {0}")]
pub struct ParseRolError(pub String);

impl FromStr for Rol {
    type Err = ParseRolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrador" => Ok(Rol::Administrador),
            "Auditor" => Ok(Rol::Auditor),
            "Corredor" => Ok(Rol::Corredor),
            other => Err(ParseRolError(other.to_string())),
        }
    }
}
