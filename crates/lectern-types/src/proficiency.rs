//! Reader proficiency levels.
//!
//! Two independent proficiency axes steer personalization: programming
//! experience and AI familiarity. Both use the same four-level scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reader's proficiency on one axis (programming or AI).
///
/// Parsing is case-sensitive: the API contract transmits the exact
/// capitalized names (`Novice`, `Beginner`, `Intermediate`, `Expert`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Novice,
    Beginner,
    Intermediate,
    Expert,
}

impl Proficiency {
    /// All levels, in ascending order. Used for table construction and
    /// error messages.
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Novice,
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Expert,
    ];
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proficiency::Novice => write!(f, "Novice"),
            Proficiency::Beginner => write!(f, "Beginner"),
            Proficiency::Intermediate => write!(f, "Intermediate"),
            Proficiency::Expert => write!(f, "Expert"),
        }
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Novice" => Ok(Proficiency::Novice),
            "Beginner" => Ok(Proficiency::Beginner),
            "Intermediate" => Ok(Proficiency::Intermediate),
            "Expert" => Ok(Proficiency::Expert),
            other => Err(format!("invalid proficiency level: '{other}'")),
        }
    }
}
