//! Storage adapters for the catalog.
//!
//! Both adapters hold a [`dataset::Dataset`] behind a `tokio` read/write lock. Mutations take
//! the write lock for their whole duration, so competing deletes of one id resolve to a single
//! success.
//!
//! * [`memory::InMemoryRepository`]: volatile, used by tests and embedding callers.
//! * [`json_file::JsonFileRepository`]: persisted to a JSON document after every mutation.
//! * [`seed`]: the built-in starter dataset.

pub mod dataset;
pub mod json_file;
pub mod memory;
pub mod seed;

pub use dataset::Dataset;
pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
