//! # Error Taxonomy
//!
//! Two layers of failure:
//!
//! * [`StoreError`]: raised by [`crate::repository::QuestionRepository`] implementations.
//! * [`CatalogError`]: raised by the catalog service. Every store failure is collapsed into
//!   one of the coarse kinds, each tied to a fixed HTTP status and message.
//!   `BadRequest` is reserved for malformed requests; no current route raises it.

use std::io;

use thiserror::Error;

use crate::models::QuestionId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("question {0} does not exist")]
    QuestionNotFound(QuestionId),
    #[error("question id space exhausted")]
    IdExhausted,
    #[error("store io failure: {0}")]
    Io(#[from] io::Error),
    #[error("store document is malformed: {0}")]
    Serialization(String),
}

/// Failure kinds surfaced by the catalog.
///
/// The payload is an internal reason used for logging. It never reaches a response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl CatalogError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable(reason.into())
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Unprocessable(_) => 422,
            Self::BadRequest(_) => 400,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "404 not found",
            Self::Unprocessable(_) => "422 unprocessable",
            Self::BadRequest(_) => "400 bad request",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::NotFound(reason) | Self::Unprocessable(reason) | Self::BadRequest(reason) => {
                reason
            }
        }
    }
}
