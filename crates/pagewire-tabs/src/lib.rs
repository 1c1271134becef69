//! Pagewire Tab Switching
//!
//! A fixed set of tabs, each a trigger element plus a content panel whose id
//! is `<key>-tab`. Exactly one tab carries the active designation once a
//! selection has been made; the set never grows or shrinks after discovery.
//!
//! Selection is split in two: `compute_active_state` decides what the tree
//! should look like, `TabController::select` applies it.

mod controller;
mod error;
mod render;
mod state;
mod tab;

pub use controller::{TabController, TabOptions};
pub use error::TabError;
pub use render::{compute_active_state, RenderInstruction};
pub use state::TabState;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
