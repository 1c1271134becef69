//! Download control error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("UI tree error: {0}")]
    Dom(#[from] pagewire_dom::DomError),

    #[error("No async runtime available to schedule label restore")]
    NoRuntime,
}
