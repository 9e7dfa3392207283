//! Billing engine for the hospital administration console
//!
//! Provides the ledger and document pipeline behind the IPD billing
//! screens:
//! - Service, equipment, and payment bookkeeping per admission
//! - Pure ledger arithmetic (totals, discount, outstanding balance)
//! - Admission lifecycle with discharge enforced in the data layer
//! - Daily performance metrics derived on demand from record snapshots
//! - Printable invoice and report assembly for PDF export

pub mod admission;
pub mod error;
pub mod invoice;
pub mod ledger;
pub mod models;
pub mod reporting;
pub mod service;
pub mod validation;

pub use admission::*;
pub use error::*;
pub use invoice::*;
pub use ledger::*;
pub use models::*;
pub use reporting::*;
pub use service::*;
pub use validation::*;
