//! UI tree error types

use thiserror::Error;

use crate::element::NodeId;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid selector: {0}")]
    Selector(String),
}
