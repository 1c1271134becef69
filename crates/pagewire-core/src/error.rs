//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("UI tree error: {0}")]
    Dom(#[from] pagewire_dom::DomError),

    #[error("Tab error: {0}")]
    Tab(#[from] pagewire_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] pagewire_navigation::NavigationError),

    #[error("Download error: {0}")]
    Download(#[from] pagewire_download::DownloadError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
