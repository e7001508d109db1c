//! # vitalis-shared
//!
//! Domain types and the public error surface of the vitalis health-record
//! service.
//!
//! Every struct derives `Serialize` and `Deserialize` with camelCase field
//! names so it can be handed directly to the hosting layer as JSON.

pub mod error;
pub mod types;

pub use error::{ErrorCode, ServiceError};
pub use types::*;
