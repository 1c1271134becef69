//! Pagewire UI tree
//!
//! The page markup is parsed once into a flat arena of elements in document
//! order. Behaviors hold `NodeId`s into the arena and mutate classes, labels
//! and scroll position through the `Document`. Elements are never added or
//! removed after parsing.

mod document;
mod element;
mod error;

pub use document::{Document, ScrollBehavior, ScrollRequest, SharedDocument};
pub use element::{Element, NodeId};
pub use error::DomError;

pub type Result<T> = std::result::Result<T, DomError>;
