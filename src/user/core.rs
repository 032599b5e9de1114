//! Defines the user model and the database queries for registering and authenticating users.

use std::{fmt::Display, sync::Mutex};

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, PasswordHash, db::lock_connection};

// ============================================================================
// MODELS
// ============================================================================

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserID(i64);

impl UserID {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered user of the application.
///
/// Only the hash of the user's password is stored. Use [UserResponse] when
/// sending a user to a client so that the hash is never exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's ID in the application database.
    pub id: UserID,
    /// The email the user registered with. Unique across all users.
    pub email: String,
    /// The user's password hash.
    pub password_hash: PasswordHash,
    /// The user's display name.
    pub name: String,
}

/// The data needed to register a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// The email to register. Must not belong to an existing user.
    pub email: String,
    /// The hash of the new user's password.
    pub password_hash: PasswordHash,
    /// The user's display name.
    pub name: String,
}

/// The public view of a [User], without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// The user's ID in the application database.
    pub id: UserID,
    /// The email the user registered with.
    pub email: String,
    /// The user's display name.
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the user table.
///
/// Email uniqueness is enforced by the table rather than by the application, so
/// concurrent registrations with the same email cannot both succeed.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                name TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Create and insert a new user into the database.
///
/// # Errors
///
/// This function will return a:
/// - [Error::DuplicateEmail] if the email already belongs to a user,
/// - or [Error::SqlError] if some other SQL error occurred.
pub fn create_user(new_user: NewUser, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare(
            "INSERT INTO user (email, password, name) VALUES (?1, ?2, ?3)
             RETURNING id, email, password, name",
        )?
        .query_row(
            (
                &new_user.email,
                new_user.password_hash.as_ref(),
                &new_user.name,
            ),
            map_user_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                },
                _,
            ) => Error::DuplicateEmail,
            error => error.into(),
        })
}

/// Get the user from the database that has the specified `email` address.
///
/// The email must match exactly, including case.
///
/// # Errors
///
/// This function will return a:
/// - [Error::NotFound] if `email` does not belong to a registered user,
/// - or [Error::SqlError] if some other SQL error occurred.
pub fn get_user_by_email(email: &str, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, email, password, name FROM user WHERE email = :email")?
        .query_one(&[(":email", email)], map_user_row)
        .map_err(|error| error.into())
}

/// Get all users in the order they registered.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred.
pub fn get_all_users(connection: &Connection) -> Result<Vec<User>, Error> {
    connection
        .prepare("SELECT id, email, password, name FROM user ORDER BY id ASC")?
        .query_map([], map_user_row)?
        .map(|maybe_user| maybe_user.map_err(Error::from))
        .collect()
}

/// Get the number of users in the database.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred.
pub fn count_users(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM user;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Check `raw_password` against the stored password hash of the user with `email`.
///
/// The connection is only locked while the user is looked up. The password is
/// verified after the lock is released, so other requests can use the
/// database while the hash is computed. Verifying is slow, call this from a
/// blocking thread.
///
/// Nothing is stored or issued on success, the caller only learns whether the
/// credentials are correct.
///
/// # Errors
///
/// This function will return a:
/// - [Error::NotAuthenticated] if no user has `email` or the password is wrong,
/// - [Error::HashingError] if the stored hash could not be checked,
/// - [Error::DatabaseLockError] if the database lock is poisoned,
/// - or [Error::SqlError] if some other SQL error occurred.
pub fn authenticate(
    email: &str,
    raw_password: &str,
    db_connection: &Mutex<Connection>,
) -> Result<User, Error> {
    let user = {
        let connection = lock_connection(db_connection)?;
        get_user_by_email(email, &connection)
    };

    let user = match user {
        Ok(user) => user,
        Err(Error::NotFound) => return Err(Error::NotAuthenticated),
        Err(error) => return Err(error),
    };

    if user.password_hash.verify(raw_password)? {
        Ok(user)
    } else {
        Err(Error::NotAuthenticated)
    }
}

/// Map a database row to a User.
fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_id = row.get(0)?;
    let email = row.get(1)?;
    let raw_password_hash: String = row.get(2)?;
    let name = row.get(3)?;

    Ok(User {
        id: UserID::new(raw_id),
        email,
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
        name,
    })
}

// ============================================================================
// TESTS
// ============================================================================
