//! # Domain Models
//!
//! Core data structures of the trivia catalog.
//!
//! ## Entities
//! * [`category::Category`]: A labelled grouping of questions. Read-only for the catalog.
//! * [`question::Question`]: A quiz item referencing its category by id.
//!
//! ## Value Objects
//! * [`question::QuestionDraft`] / [`question::NewQuestion`]: Raw and validated creation input.
//! * [`quiz::QuizCategory`]: The pool a quiz round draws from.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::{Category, CategoryId};
pub use question::{NewQuestion, Question, QuestionDraft, QuestionId};
pub use quiz::QuizCategory;
