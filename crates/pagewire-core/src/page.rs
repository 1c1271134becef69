//! Page: one-shot behavior wiring and click dispatch

use std::collections::HashMap;

use pagewire_dom::{NodeId, SharedDocument};
use pagewire_download::BusyIndicator;
use pagewire_navigation::SmoothScroller;
use pagewire_tabs::TabController;

use crate::config::Config;
use crate::event::ClickEvent;
use crate::Result;

/// Behavior registered on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Select the tab with this key
    TabSwitch(String),
    /// Intercept an in-page link
    Anchor,
    /// Show the busy label on a download control
    Download,
}

/// A document with its behaviors attached.
///
/// Constructed once per document through `initialize`; every element that
/// gets a behavior is decided at that point.
pub struct Page {
    document: SharedDocument,
    config: Config,
    tabs: TabController,
    scroller: SmoothScroller,
    indicator: BusyIndicator,
    handlers: HashMap<NodeId, Vec<Handler>>,
}

impl Page {
    /// Discover triggers, anchors and download controls in `document` and
    /// register their handlers.
    pub fn initialize(document: SharedDocument, config: Config) -> Result<Self> {
        config.validate()?;

        let (tabs, anchors, downloads) = {
            let doc = document.read();
            (
                TabController::discover(&doc, &config.tab_options()),
                SmoothScroller::discover(&doc),
                doc.elements_with_class(&config.download_class),
            )
        };

        let mut handlers: HashMap<NodeId, Vec<Handler>> = HashMap::new();
        for tab in tabs.tabs() {
            handlers
                .entry(tab.trigger)
                .or_default()
                .push(Handler::TabSwitch(tab.key.clone()));
        }
        for anchor in &anchors {
            handlers.entry(*anchor).or_default().push(Handler::Anchor);
        }
        for control in &downloads {
            handlers.entry(*control).or_default().push(Handler::Download);
        }

        tracing::info!(
            tabs = tabs.tabs().len(),
            anchors = anchors.len(),
            downloads = downloads.len(),
            active_tab = ?tabs.active_key(),
            "Page behaviors attached"
        );

        let indicator = BusyIndicator::new(document.clone(), config.indicator_options());

        Ok(Self {
            document,
            config,
            tabs,
            scroller: SmoothScroller::new(),
            indicator,
            handlers,
        })
    }

    /// Dispatch a click on `node` to its handlers in registration order.
    ///
    /// A failing handler is logged and skipped; the remaining handlers still
    /// run. Elements without handlers are ignored.
    pub fn click(&mut self, node: NodeId) -> ClickEvent {
        let mut event = ClickEvent::new(node);

        let Some(handlers) = self.handlers.get(&node).cloned() else {
            tracing::trace!(node = %node, "Click on element without handlers");
            return event;
        };

        for handler in &handlers {
            if let Err(e) = self.run_handler(handler, &mut event) {
                tracing::warn!(node = %node, handler = ?handler, error = %e, "Click handler failed");
            }
        }

        event
    }

    fn run_handler(&mut self, handler: &Handler, event: &mut ClickEvent) -> Result<()> {
        match handler {
            Handler::TabSwitch(key) => {
                let mut doc = self.document.write();
                self.tabs.select(&mut doc, key)?;
            }
            Handler::Anchor => {
                event.prevent_default();
                let mut doc = self.document.write();
                self.scroller.handle_click(&mut doc, event.target)?;
            }
            Handler::Download => {
                self.indicator.trigger(event.target)?;
            }
        }
        Ok(())
    }

    /// Select a tab directly, reporting an unknown key as an error.
    pub fn select_tab(&mut self, key: &str) -> Result<()> {
        let mut doc = self.document.write();
        self.tabs.select(&mut doc, key)?;
        Ok(())
    }

    pub fn handlers_for(&self, node: NodeId) -> &[Handler] {
        self.handlers.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn indicator(&self) -> &BusyIndicator {
        &self.indicator
    }

    /// Restore every busy control and drop pending timers.
    pub fn shutdown(&self) {
        self.indicator.cancel_all();
        tracing::debug!("Page behaviors detached");
    }
}
