//! Play modes
//!
//! A closed set of modes, each owning its target-selection rule and attempt
//! budget. Dispatch happens once per guess over the session's target, never
//! by string comparison.

use std::fmt;

/// How the secret is chosen and scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed secret drawn from the curated answers list, 6 attempts
    Official,
    /// Fixed secret drawn from the full accepted-guess list, 6 attempts
    Extreme,
    /// No fixed secret: the candidate pool is narrowed adversarially,
    /// 10 attempts
    Absurdle,
}

impl Mode {
    /// Create a mode from a name string
    ///
    /// Supported names: "official", "extreme", "absurdle" (plus a few
    /// aliases). Defaults to official if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "extreme" | "wide" | "hard" => Self::Extreme,
            "absurdle" | "adaptive" | "absurd" => Self::Absurdle,
            _ => Self::Official,
        }
    }

    /// Attempt budget for this mode
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Official | Self::Extreme => 6,
            Self::Absurdle => 10,
        }
    }

    /// Whether the target is narrowed adversarially instead of fixed
    #[must_use]
    pub const fn is_adaptive(self) -> bool {
        matches!(self, Self::Absurdle)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Official => "official",
            Self::Extreme => "extreme",
            Self::Absurdle => "absurdle",
        };
        write!(f, "{name}")
    }
}
