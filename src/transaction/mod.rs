//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` request body
//! - Database functions for storing and querying transactions
//! - Route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod get_endpoints;
mod state;

pub use self::core::{
    NewTransaction, Transaction, count_transactions, create_transaction,
    create_transaction_table, get_all_transactions, get_transactions_by_type,
};
pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoints::{get_transactions_by_type_endpoint, get_transactions_endpoint};
pub use state::TransactionState;
