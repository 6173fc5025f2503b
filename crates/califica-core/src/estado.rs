//! Rating status and origin.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a calificacion.
///
/// State machine: `Pendiente` → `Aprobada` | `Rechazada`, driven only by an
/// auditor decision. Both outcomes are terminal unless re-review is
/// explicitly enabled by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Estado {
    Pendiente,
    Aprobada,
    Rechazada,
}

impl Estado {
    /// Stored/wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Pendiente => "Pendiente",
            Estado::Aprobada => "Aprobada",
            Estado::Rechazada => "Rechazada",
        }
    }

    /// Whether this status admits no further transition by default.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Estado::Aprobada | Estado::Rechazada)
    }

    /// Whether the value is a valid review decision (`Pendiente` is not).
    #[must_use]
    pub fn is_decision(&self) -> bool {
        self.is_terminal()
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status strings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("estado desconocido: {0}")]
pub struct ParseEstadoError(pub String);

impl FromStr for Estado {
    type Err = ParseEstadoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendiente" => Ok(Estado::Pendiente),
            "Aprobada" => Ok(Estado::Aprobada),
            "Rechazada" => Ok(Estado::Rechazada),
            other => Err(ParseEstadoError(other.to_string())),
        }
    }
}

/// How a calificacion entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origen {
    /// Entered interactively by a corredor.
    Manual,
    /// Loaded from an uploaded file.
    Archivo,
}

impl Origen {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Origen::Manual => "Manual",
            Origen::Archivo => "Archivo",
        }
    }
}

impl fmt::Display for Origen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origen {
    type Err = ParseEstadoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Origen::Manual),
            "Archivo" => Ok(Origen::Archivo),
            other => Err(ParseEstadoError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_excludes_pendiente() {
        assert!(!Estado::Pendiente.is_decision());
        assert!(Estado::Aprobada.is_decision());
        assert!(Estado::Rechazada.is_decision());
    }

    #[test]
    fn parse_rejects_arbitrary_tokens() {
        assert!("Anulada".parse::<Estado>().is_err());
        assert!("aprobada".parse::<Estado>().is_err());
    }
}
