//! Tab Controller
//!
//! Owns the single-selection state over the tabs discovered in a document
//! and keeps trigger/panel classes consistent with it.

use pagewire_dom::{Document, NodeId};
use serde::{Deserialize, Serialize};

use crate::render::{compute_active_state, RenderInstruction};
use crate::state::TabState;
use crate::tab::Tab;
use crate::Result;

/// Markup conventions used to discover tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabOptions {
    /// Class marking a trigger element
    pub trigger_class: String,
    /// Attribute on a trigger naming its tab key
    pub key_attribute: String,
    /// Class marking a content panel
    pub panel_class: String,
    /// Panel id is the tab key followed by this suffix
    pub panel_suffix: String,
    /// Class carrying the active designation
    pub active_class: String,
}

impl Default for TabOptions {
    fn default() -> Self {
        Self {
            trigger_class: "tab-btn".to_string(),
            key_attribute: "data-tab".to_string(),
            panel_class: "tab-content".to_string(),
            panel_suffix: "-tab".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabController {
    tabs: Vec<Tab>,
    /// Every trigger-class element, registered as a tab or not
    triggers: Vec<NodeId>,
    /// Every panel-class element, owned by a tab or not
    panels: Vec<NodeId>,
    active_class: String,
    active: Option<String>,
}

impl TabController {
    /// Enumerate triggers and panels in `doc`.
    ///
    /// Triggers without a key, and later triggers repeating an earlier key,
    /// are skipped. The first trigger pre-marked active in the markup
    /// defines the starting selection. Skipped triggers are still cleared
    /// by every `select`.
    pub fn discover(doc: &Document, options: &TabOptions) -> Self {
        let triggers = doc.elements_with_class(&options.trigger_class);
        let panels = doc.elements_with_class(&options.panel_class);
        let mut tabs: Vec<Tab> = Vec::new();
        let mut active = None;

        for &trigger in &triggers {
            let Ok(element) = doc.element(trigger) else {
                continue;
            };

            let Some(key) = element.attr(&options.key_attribute) else {
                tracing::warn!(node = %trigger, attribute = %options.key_attribute, "Tab trigger has no key");
                continue;
            };

            if tabs.iter().any(|t| t.key == key) {
                tracing::warn!(node = %trigger, tab = %key, "Duplicate tab trigger ignored");
                continue;
            }

            let panel = doc.get_element_by_id(&Tab::panel_id(key, &options.panel_suffix));
            if panel.is_none() {
                tracing::warn!(tab = %key, "Tab has no content panel");
            }

            let mut tab = match Tab::new(key, trigger, panel) {
                Ok(tab) => tab,
                Err(e) => {
                    tracing::warn!(node = %trigger, error = %e, "Skipping tab trigger");
                    continue;
                }
            };

            if active.is_none() && element.has_class(&options.active_class) {
                tab.state = TabState::Active;
                active = Some(tab.key.clone());
            }

            tabs.push(tab);
        }

        tracing::debug!(
            tabs = tabs.len(),
            triggers = triggers.len(),
            panels = panels.len(),
            active = ?active,
            "Discovered tabs"
        );

        Self {
            tabs,
            triggers,
            panels,
            active_class: options.active_class.clone(),
            active,
        }
    }

    /// Make `key` the only active tab.
    ///
    /// On error nothing in `doc` has been touched.
    pub fn select(&mut self, doc: &mut Document, key: &str) -> Result<()> {
        let instructions = compute_active_state(&self.tabs, &self.triggers, &self.panels, key)?;

        // Validate every node before mutating any of them
        for instruction in &instructions {
            doc.element(instruction.node())?;
        }
        self.apply(doc, &instructions)?;

        for tab in &mut self.tabs {
            let state = if tab.key == key {
                TabState::Active
            } else {
                TabState::Inactive
            };
            tab.set_state(state);
        }

        if self.active.as_deref() != Some(key) {
            tracing::debug!(from = ?self.active, to = %key, "Switched tab");
        }
        self.active = Some(key.to_string());

        Ok(())
    }

    /// Apply render instructions to the tree.
    pub fn apply(&self, doc: &mut Document, instructions: &[RenderInstruction]) -> Result<()> {
        for instruction in instructions {
            match *instruction {
                RenderInstruction::Activate(node) => {
                    doc.add_class(node, &self.active_class)?;
                }
                RenderInstruction::Deactivate(node) => {
                    doc.remove_class(node, &self.active_class)?;
                }
            }
        }
        Ok(())
    }

    /// Key of the tab whose trigger is `node`.
    pub fn key_for_trigger(&self, node: NodeId) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.trigger == node)
            .map(|t| t.key.as_str())
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn triggers(&self) -> &[NodeId] {
        &self.triggers
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    pub fn get_tab(&self, key: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.key == key)
    }

    pub fn state_of(&self, key: &str) -> Option<TabState> {
        self.get_tab(key).map(|t| t.state)
    }
}
