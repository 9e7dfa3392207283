//! Common error handling utilities for CareDesk Engine
//!
//! This module provides the standardized error type, error codes, and
//! logging helpers used across all CareDesk Engine crates. Every
//! domain crate keeps its own thiserror enum and converts into
//! [`CareDeskError`] at the boundary, so callers see one consistent
//! error surface.
//!
//! # Error Categories
//!
//! - **ValidationError**: Input validation and data format errors
//! - **LifecycleError**: Operations rejected by admission state
//! - **StoreError**: Record store read/write/subscription errors
//! - **BedInventoryError**: Bed status mutation errors
//! - **LayoutError**: Page format and pagination errors
//! - **RenderError**: Page rendering failures reported by collaborators
//! - **BusinessError**: Domain-specific business rule violations
//! - **ConfigError**: Configuration loading errors
//! - **InternalError**: Infrastructure and system-level errors

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
