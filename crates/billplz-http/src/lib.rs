//! # billplz-http
//!
//! Reqwest-based HTTP client for the Billplz payment API.
//!
//! This crate provides:
//! - One async method per API endpoint (collections, open collections,
//!   bills, transactions, payment methods, bank verification)
//! - HTTP basic auth with the API key as username
//! - Mapping of selected HTTP status codes to named sentinel errors
//!
//! Payloads are validated with `billplz-core` before any network I/O.
//!
//! ## Example
//!
//! ```ignore
//! use billplz_core::Bill;
//! use billplz_http::Client;
//!
//! let client = Client::new("73eb57f0-7d4e-42b9-a544-aeac6e4b0f81", true);
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
//! let created = client.create_bill(&bill).await?;
//! ```

mod client;
mod error;

pub use client::{Client, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};
pub use error::Error;
