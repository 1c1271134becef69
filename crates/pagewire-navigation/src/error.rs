//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Anchor has no href: {0}")]
    MissingHref(pagewire_dom::NodeId),

    #[error("UI tree error: {0}")]
    Dom(#[from] pagewire_dom::DomError),
}
