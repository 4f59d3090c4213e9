//! Client-side Errors
//!
//! Failures that never reach the network. HTTP failures live in `api::ApiError`.

use thiserror::Error;

/// Invalid menu tree edit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Menu {0} does not exist")]
    UnknownNode(u64),
    #[error("Parent menu {0} does not exist")]
    UnknownParent(u64),
    #[error("Menu {node} cannot be placed under {parent}, which is itself or one of its descendants")]
    Cycle { node: u64, parent: u64 },
}

/// Form rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("A menu cannot be its own parent or sit under its own descendant")]
    InvalidParent,
}
