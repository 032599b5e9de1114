//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, insert a [NewTransaction] with [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened, in whatever format the client chose.
    pub date: Option<String>,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The kind of flow, e.g. "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The category of the transaction, e.g. "Groceries", "Transport", "Rent".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: i64,
}

/// The data needed to log a new [Transaction].
///
/// This is also the request body for logging a transaction, every field except
/// `date` must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// When the transaction happened.
    ///
    /// The value is stored as is, it is neither parsed nor validated.
    #[serde(default)]
    pub date: Option<String>,

    /// A human-readable description of the transaction.
    ///
    /// Descriptions are expected to be at most 50 characters long, but longer
    /// descriptions are stored unchanged.
    ///
    /// # Examples
    /// - `"Salary - January 2025"`
    /// - `"Starbucks #1234 - Downtown"`
    pub description: String,

    /// The kind of flow, e.g. "income" or "expense".
    ///
    /// This is free-form text, any value is accepted.
    #[serde(rename = "type")]
    pub transaction_type: String,

    /// The category of the transaction, e.g. "Groceries", "Transport", "Rent".
    pub category: String,

    /// The monetary amount of the transaction in whole units of the smallest
    /// denomination the client uses, e.g. cents.
    pub amount: i64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction into the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (date, description, \"type\", category, amount)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, description, \"type\", category, amount",
        )?
        .query_row(
            (
                new_transaction.date,
                new_transaction.description,
                new_transaction.transaction_type,
                new_transaction.category,
                new_transaction.amount,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, description, \"type\", category, amount
             FROM \"transaction\" ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve every transaction whose type is exactly `transaction_type`, in the
/// order they were created.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if no transaction has the type `transaction_type`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transactions_by_type(
    transaction_type: &str,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let transactions = connection
        .prepare(
            "SELECT id, date, description, \"type\", category, amount
             FROM \"transaction\" WHERE \"type\" = :type ORDER BY id ASC",
        )?
        .query_map(&[(":type", transaction_type)], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    if transactions.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(transactions)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                description TEXT NOT NULL,
                \"type\" TEXT NOT NULL,
                category TEXT NOT NULL,
                amount INTEGER NOT NULL
                )",
        (),
    )?;

    // Backs the lookup by type.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_type ON \"transaction\"(\"type\");",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let transaction_type = row.get(3)?;
    let category = row.get(4)?;
    let amount = row.get(5)?;

    Ok(Transaction {
        id,
        date,
        description,
        transaction_type,
        category,
        amount,
    })
}

// ============================================================================
// TESTS
// ============================================================================
