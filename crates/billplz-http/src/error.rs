//! Error types for the Billplz HTTP client

use billplz_core::ValidationErrors;
use thiserror::Error;

/// Errors surfaced by [`Client`](crate::Client) methods.
///
/// The named variants are derived from HTTP status codes on specific
/// endpoints; validation failures are raised before any network I/O, and
/// transport or decode failures propagate from reqwest unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The queried collection or open collection cannot be found.
    #[error("queried collection cannot be found")]
    CollectionNotFound,

    /// A bill with the given ID cannot be found.
    #[error("bill not found")]
    BillNotFound,

    /// A bank account with the given account number cannot be found.
    #[error("bank account not found")]
    BankAccountNotFound,

    /// The collection cannot be activated.
    #[error("collection cannot be activated")]
    CannotActivateCollection,

    /// The collection cannot be deactivated.
    #[error("collection cannot be deactivated")]
    CannotDeactivateCollection,

    /// The request requires the 'ADMIN' setting on the Billplz account.
    #[error("admin privilege required")]
    AdminPrivilegeRequired,

    /// An invalid API key was provided for authentication.
    #[error("invalid API authorization key")]
    Unauthorized,

    /// The payload failed client-side validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A transport or decode failure from the underlying HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
