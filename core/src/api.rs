//! # API Layer
//!
//! The JSON surface of the catalog, independent of any transport.
//!
//! * [`router::Router`] resolves a method and target to a catalog operation.
//! * [`request`] decodes request bodies, including the quiz category sentinel.
//! * [`envelope`] shapes results and failures into `{ "success": ... }` documents.
//!
//! A server or CLI hands `(method, target, body)` to [`router::Router::dispatch`] and
//! writes the returned [`envelope::ApiResponse`] back out.

pub mod envelope;
pub mod request;
pub mod router;

pub use envelope::ApiResponse;
pub use router::{Method, Router};
