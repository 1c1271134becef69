//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Panel not found for tab: {0}")]
    PanelNotFound(String),

    #[error("Invalid tab key: {0:?}")]
    InvalidKey(String),

    #[error("UI tree error: {0}")]
    Dom(#[from] pagewire_dom::DomError),
}
