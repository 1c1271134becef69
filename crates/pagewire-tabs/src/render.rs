//! Pure selection computation
//!
//! Deciding which elements carry the active designation needs no UI tree:
//! the result is a list of instructions that `TabController` applies.

use pagewire_dom::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "node", rename_all = "lowercase")]
pub enum RenderInstruction {
    /// Add the active designation
    Activate(NodeId),
    /// Remove the active designation
    Deactivate(NodeId),
}

impl RenderInstruction {
    pub fn node(&self) -> NodeId {
        match self {
            RenderInstruction::Activate(node) | RenderInstruction::Deactivate(node) => *node,
        }
    }
}

/// Instructions that leave exactly `selected`'s trigger and panel active.
///
/// Every trigger-class element in `triggers`, every registered trigger and
/// panel, and every panel-class element in `panels` is deactivated first,
/// each node once, in that order. The selected pair is activated last, so
/// applying the list in order is correct even when elements that never
/// became tabs (keyless or duplicate triggers) were pre-marked active.
///
/// Fails without producing anything if `selected` is not registered or has
/// no panel.
pub fn compute_active_state(
    tabs: &[Tab],
    triggers: &[NodeId],
    panels: &[NodeId],
    selected: &str,
) -> Result<Vec<RenderInstruction>> {
    let tab = tabs
        .iter()
        .find(|t| t.key == selected)
        .ok_or_else(|| TabError::NotFound(selected.to_string()))?;
    let panel = tab
        .panel
        .ok_or_else(|| TabError::PanelNotFound(selected.to_string()))?;

    let mut seen = HashSet::new();
    let mut instructions: Vec<RenderInstruction> = triggers
        .iter()
        .copied()
        .chain(tabs.iter().map(|t| t.trigger))
        .chain(tabs.iter().filter_map(|t| t.panel))
        .chain(panels.iter().copied())
        .filter(|node| seen.insert(*node))
        .map(RenderInstruction::Deactivate)
        .collect();
    instructions.push(RenderInstruction::Activate(tab.trigger));
    instructions.push(RenderInstruction::Activate(panel));

    Ok(instructions)
}
