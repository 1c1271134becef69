//! Tab State
//!
//! ```text
//! Inactive
//!   ↓ select(key)
//! Active
//!   ↓ select(other)
//! Inactive
//! ```
//!
//! Every tab may be inactive (nothing pre-marked in the markup), but once a
//! selection has been made exactly one tab is active.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Trigger and panel carry the active designation
    Active,
    /// Trigger and panel are plain
    #[default]
    Inactive,
}

impl TabState {
    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "inactive" => Ok(TabState::Inactive),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state() {
        assert_eq!("active".parse::<TabState>().unwrap(), TabState::Active);
        assert_eq!("Inactive".parse::<TabState>().unwrap(), TabState::Inactive);
        assert!("frozen".parse::<TabState>().is_err());
    }

    #[test]
    fn test_default_is_inactive() {
        assert!(!TabState::default().is_active());
        assert_eq!(TabState::Active.to_string(), "active");
    }
}
