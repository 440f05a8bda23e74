//! # Trivia Core
//!
//! The question catalog and everything it is driven by or drives.
//!
//! * **[`catalog`]**: [`catalog::CatalogService`], the filtering, pagination, search and quiz
//!   selection logic.
//! * **[`quiz`]**: Uniform random selection over a candidate pool.
//! * **[`store`]**: Implementations of [`trivia_common::repository::QuestionRepository`].
//! * **[`api`]**: JSON envelopes and request routing in front of the catalog.

pub mod api;
pub mod catalog;
pub mod quiz;
pub mod store;
