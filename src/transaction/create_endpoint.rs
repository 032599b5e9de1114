//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::lock_connection,
    json::JsonBody,
    transaction::{NewTransaction, TransactionState, create_transaction},
};

/// The message sent to the client after a transaction has been logged.
pub const TRANSACTION_CREATED_MESSAGE: &str = "Transaction has been created.";

/// A route handler for creating a new transaction.
///
/// Apart from required fields being present, the transaction is stored as is.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonBody(new_transaction): JsonBody<NewTransaction>,
) -> Result<Json<&'static str>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let transaction = create_transaction(new_transaction, &connection).inspect_err(|error| {
        tracing::error!("could not create transaction: {error}");
    })?;

    tracing::info!("Created transaction {}", transaction.id);

    Ok(Json(TRANSACTION_CREATED_MESSAGE))
}
