//! # Trivia Common
//!
//! Shared building blocks for the trivia catalog, used by every other crate in the workspace.
//!
//! * **[`models`]**: Categories, questions and quiz scopes.
//! * **[`error`]**: The storage and catalog error taxonomy.
//! * **[`repository`]**: The storage port the catalog service is driven through.
//! * **[`pagination`]**: Page arithmetic over ordered collections.
//! * **[`config`]**: Runtime options collected by the CLI.
//!
//! Nothing in here performs IO.

pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
