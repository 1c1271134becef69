//! Tab data structure

use pagewire_dom::NodeId;
use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::state::TabState;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Key named by the trigger's key attribute
    pub key: String,
    /// Clickable element requesting activation
    pub trigger: NodeId,
    /// Content region with id `<key><suffix>`, if the markup has one
    pub panel: Option<NodeId>,
    /// Current state
    pub state: TabState,
}

impl Tab {
    pub fn new(key: impl Into<String>, trigger: NodeId, panel: Option<NodeId>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TabError::InvalidKey(key));
        }

        Ok(Self {
            key,
            trigger,
            panel,
            state: TabState::Inactive,
        })
    }

    /// Id the panel of `key` is expected to carry.
    pub fn panel_id(key: &str, suffix: &str) -> String {
        format!("{}{}", key, suffix)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn set_state(&mut self, state: TabState) {
        if self.state != state {
            tracing::trace!(tab = %self.key, from = %self.state, to = %state, "Tab state transition");
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("pricing", NodeId(3), Some(NodeId(9))).unwrap();
        assert_eq!(tab.key, "pricing");
        assert_eq!(tab.state, TabState::Inactive);
        assert!(!tab.is_active());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            Tab::new("  ", NodeId(0), None),
            Err(TabError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_panel_id() {
        assert_eq!(Tab::panel_id("home", "-tab"), "home-tab");
    }
}
