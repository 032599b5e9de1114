//! Defines the endpoints for listing transactions.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::lock_connection,
    path_param::PathParam,
    transaction::{Transaction, TransactionState, get_all_transactions, get_transactions_by_type},
};

/// A route handler for listing every transaction.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_transactions(&connection).map(Json)
}

/// A route handler for listing every transaction of the given type.
///
/// This function will return [Error::NotFound] if no transaction has the type
/// `transaction_type`.
pub async fn get_transactions_by_type_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_type): PathParam<String>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_transactions_by_type(&transaction_type, &connection).map(Json)
}
