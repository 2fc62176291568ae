//! Error types used throughout the planner

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for plan computation
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PlanError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Unrepresentable local time: {0}")]
    InvalidLocalTime(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlanError>;
