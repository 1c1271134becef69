//! Pagewire Core
//!
//! Wires the page behaviors onto a parsed document exactly once and routes
//! click events to them. Handlers never abort each other: failures are
//! logged and the click carries on.

mod config;
mod error;
mod event;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use event::ClickEvent;
pub use page::{Handler, Page};

// Re-export behavior components
pub use pagewire_dom::{
    Document, DomError, Element, NodeId, ScrollBehavior, ScrollRequest, SharedDocument,
};
pub use pagewire_download::{BusyIndicator, DownloadError, IndicatorOptions};
pub use pagewire_navigation::{AnchorTarget, NavigationError, ScrollOutcome, SmoothScroller};
pub use pagewire_tabs::{
    compute_active_state, RenderInstruction, Tab, TabController, TabError, TabOptions, TabState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
