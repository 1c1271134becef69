//! Click events

use pagewire_dom::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element that was clicked
    pub target: NodeId,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Suppress the element's default action (e.g. jump navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
