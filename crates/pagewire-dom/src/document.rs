//! Document: the root container behaviors are wired onto

use parking_lot::RwLock;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::element::{Element, NodeId};
use crate::error::DomError;
use crate::Result;

/// A document shared between synchronous handlers and timer tasks.
pub type SharedDocument = Arc<RwLock<Document>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll
    Smooth,
    /// Immediate jump
    Instant,
}

/// A request to bring an element into view, recorded in order of issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub behavior: ScrollBehavior,
}

/// Flat element arena in document order.
///
/// Each element's `inner_html` is captured once at parse time and is an
/// opaque label from then on: it is not kept in sync with the arena. After
/// `set_inner_html` or a class change, an ancestor's `inner_html` still shows
/// the old markup, and the elements that made up a replaced label stay in the
/// arena as they were parsed.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    scroll_log: Vec<ScrollRequest>,
}

impl Document {
    /// Parse page markup. Parsing is lenient: malformed markup still yields
    /// a tree, the same way a browser recovers.
    pub fn parse(markup: &str) -> Result<Self> {
        let html = Html::parse_document(markup);
        let all = Selector::parse("*").map_err(|e| DomError::Selector(e.to_string()))?;

        let elements: Vec<Element> = html
            .select(&all)
            .map(|el| {
                let value = el.value();
                value
                    .attrs()
                    .fold(Element::new(value.name()), |element, (name, val)| {
                        element.with_attr(name, val)
                    })
                    .with_inner_html(el.inner_html())
            })
            .collect();

        tracing::debug!(elements = elements.len(), "Parsed document");

        Ok(Self::from_elements(elements))
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            scroll_log: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedDocument {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, node: NodeId) -> Result<&Element> {
        self.elements
            .get(node.0)
            .ok_or(DomError::NodeNotFound(node))
    }

    pub fn element_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        self.elements
            .get_mut(node.0)
            .ok_or(DomError::NodeNotFound(node))
    }

    /// First element in document order whose id equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements
            .iter()
            .position(|el| el.id() == Some(id))
            .map(NodeId)
    }

    /// All elements matching `predicate`, in document order.
    pub fn find_all<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| predicate(el))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<bool> {
        Ok(self.element_mut(node)?.add_class(class))
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<bool> {
        Ok(self.element_mut(node)?.remove_class(class))
    }

    /// Replace an element's label, returning the previous one.
    ///
    /// Only this element's `inner_html` changes; ancestors and the parsed
    /// child elements are left as they were.
    pub fn set_inner_html(&mut self, node: NodeId, html: impl Into<String>) -> Result<String> {
        Ok(self.element_mut(node)?.set_inner_html(html))
    }

    pub fn scroll_into_view(&mut self, node: NodeId, behavior: ScrollBehavior) -> Result<()> {
        self.element(node)?;
        self.scroll_log.push(ScrollRequest {
            target: node,
            behavior,
        });
        Ok(())
    }

    pub fn scroll_log(&self) -> &[ScrollRequest] {
        &self.scroll_log
    }

    /// Drain recorded scroll requests, e.g. for a renderer to animate them.
    pub fn take_scroll_log(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_log)
    }
}
