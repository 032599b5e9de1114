//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The database ID of a [crate::Transaction].
pub type TransactionId = DatabaseId;
