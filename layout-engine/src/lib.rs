//! Printable page layout for the hospital console
//!
//! The console exports invoices and daily performance reports as
//! multi-page PDF documents. This crate owns the layout half of that
//! pipeline:
//!
//! - Content blocks: indivisible runs of printable content, each with a
//!   caller-estimated height in layout units
//! - Page formats: physical page dimensions and margins (A4 by default)
//! - The paginator: a greedy single-pass partition of blocks into pages
//!   that preserves order and never splits a block
//! - Document assembly: a paginated document handed to an external page
//!   renderer one page at a time
//!
//! Heights are estimates, not measurements. A misestimated block can
//! visually overflow the printed page; it never changes the partition
//! rules.

pub mod blocks;
pub mod document;
pub mod error;
pub mod page;
pub mod paginator;
pub mod settings;

pub use blocks::*;
pub use document::*;
pub use error::*;
pub use page::*;
pub use paginator::*;
pub use settings::*;
