//! Smooth scrolling for in-page anchors

use pagewire_dom::{Document, NodeId, ScrollBehavior};
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorTarget;
use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollOutcome {
    /// A scroll request was issued for the element
    Scrolled(NodeId),
    /// Bare `#`, nothing to do
    Ignored,
    /// No element carries the fragment's id
    TargetMissing(String),
    /// Not an in-page link, default navigation applies
    NotIntercepted,
}

impl ScrollOutcome {
    /// Whether the default jump navigation must be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ScrollOutcome::NotIntercepted)
    }
}

#[derive(Debug, Clone)]
pub struct SmoothScroller {
    behavior: ScrollBehavior,
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self::with_behavior(ScrollBehavior::Smooth)
    }

    pub fn with_behavior(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    /// All `a` elements whose href starts with `#`, in document order.
    pub fn discover(doc: &Document) -> Vec<NodeId> {
        doc.find_all(|el| {
            el.tag() == "a"
                && el
                    .attr("href")
                    .map(|href| AnchorTarget::parse(href).is_intercepted())
                    .unwrap_or(false)
        })
    }

    /// Handle a click on the anchor element `anchor`.
    pub fn handle_click(&self, doc: &mut Document, anchor: NodeId) -> Result<ScrollOutcome> {
        let href = doc
            .element(anchor)?
            .attr("href")
            .map(str::to_string)
            .ok_or(NavigationError::MissingHref(anchor))?;

        self.follow(doc, &href)
    }

    /// Scroll to the target of `href` if it names an existing element.
    pub fn follow(&self, doc: &mut Document, href: &str) -> Result<ScrollOutcome> {
        let fragment = match AnchorTarget::parse(href) {
            AnchorTarget::External => return Ok(ScrollOutcome::NotIntercepted),
            AnchorTarget::Top => return Ok(ScrollOutcome::Ignored),
            AnchorTarget::Fragment(fragment) => fragment,
        };

        let Some(target) = doc.get_element_by_id(&fragment) else {
            tracing::debug!(fragment = %fragment, "Scroll target not found");
            return Ok(ScrollOutcome::TargetMissing(fragment));
        };

        doc.scroll_into_view(target, self.behavior)?;
        tracing::debug!(fragment = %fragment, node = %target, "Scrolling into view");

        Ok(ScrollOutcome::Scrolled(target))
    }
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new()
    }
}
