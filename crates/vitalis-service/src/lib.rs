//! # vitalis-service
//!
//! The access-control and query layer of the vitalis health-record
//! service.
//!
//! Callers are identified by an opaque [`Principal`] resolved once per
//! request by the hosting environment and threaded explicitly into every
//! authorization-sensitive operation via [`RequestContext`].  Every
//! operation returns either its success value or a structured
//! [`ServiceError`]; internal failures never escape unconverted.
//!
//! Services are thin handles over a [`Database`] and hold no state of
//! their own.
//!
//! [`Principal`]: vitalis_shared::Principal
//! [`ServiceError`]: vitalis_shared::ServiceError
//! [`Database`]: vitalis_store::Database

pub mod health;
pub mod identity;
pub mod predictions;
pub mod stats;
pub mod users;

pub use health::HealthRecordService;
pub use identity::{validate_user, RequestContext};
pub use predictions::PredictionService;
pub use stats::system_stats;
pub use users::UserService;
