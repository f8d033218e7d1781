use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceErrorKind {
    InvalidArgument,
    UnresolvedTemplate,
    MalformedTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct AffordanceError {
    pub kind: AffordanceErrorKind,
    pub message: String,
}

impl AffordanceError {
    pub fn new(kind: AffordanceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn invalid_argument(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::InvalidArgument, message)
}

pub fn unresolved_template(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::UnresolvedTemplate, message)
}

pub fn malformed_template(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::MalformedTemplate, message)
}
