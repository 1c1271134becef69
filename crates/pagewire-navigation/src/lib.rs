//! Pagewire Navigation
//!
//! In-page links (`href` starting with `#`) are intercepted:
//! 1. `#` alone → nothing happens
//! 2. `#id` with a matching element → smooth scroll to it
//! 3. `#id` with no match → dropped silently
//!
//! Links to anything else are left to the default behavior.

mod anchor;
mod error;
mod scroll;

pub use anchor::AnchorTarget;
pub use error::NavigationError;
pub use scroll::{ScrollOutcome, SmoothScroller};

pub type Result<T> = std::result::Result<T, NavigationError>;
