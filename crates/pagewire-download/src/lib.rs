//! Pagewire Download Controls
//!
//! Clicking a download control swaps its label for a busy variant and
//! restores the original label after a fixed interval. Starting the actual
//! download is someone else's job; this layer is cosmetic only.
//!
//! Each control has at most one pending revert. Clicking again while busy
//! restarts the interval instead of stacking a second revert.

mod error;
mod indicator;

pub use error::DownloadError;
pub use indicator::{BusyIndicator, IndicatorOptions, DEFAULT_BUSY_DURATION, DEFAULT_BUSY_LABEL};

pub type Result<T> = std::result::Result<T, DownloadError>;
