//! Record store and bed inventory abstractions for CareDesk Engine
//!
//! The hospital console keeps every admission, booking, and billing
//! record in a shared realtime document database addressed by
//! slash-separated paths. This crate defines the traits the billing
//! engine consumes — the database and the bed inventory are external
//! collaborators — plus in-memory implementations used by tests and
//! single-node deployments:
//!
//! - Fetch one record or all children of a path
//! - Append a child under a generated, time-ordered unique key
//! - Partial update of the fields of one record
//! - Subscribe to change events under a path
//! - Flip a bed between available and occupied

pub mod beds;
pub mod error;
pub mod memory;
pub mod store;

pub use beds::*;
pub use error::*;
pub use memory::*;
pub use store::*;
