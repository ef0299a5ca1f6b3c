//! # billplz-core
//!
//! Entity types and payload validation for the Billplz payment API.
//!
//! This crate provides:
//! - Type definitions for collections, bills, bank accounts, transactions
//!   and payment methods, with their JSON wire mappings
//! - Per-entity validation of outgoing payloads
//! - Bank SWIFT code constants
//!
//! ## Example
//!
//! ```rust,ignore
//! use billplz_core::Bill;
//!
//! let bill = Bill {
//!     collection_id: Some("inbmmepb".to_string()),
//!     name: Some("Michael".to_string()),
//!     amount: Some(200),
//!     callback_url: Some("http://example.com/webhook/".to_string()),
//!     description: Some("Maecenas eu placerat ante.".to_string()),
//!     ..Default::default()
//! };
//!
//! bill.validate()?;
//! ```

pub mod banks;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use types::*;
pub use validation::{FieldError, ValidationErrors};
