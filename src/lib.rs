//! Spendlog is a small JSON API for keeping personal finance records.
//!
//! This library provides the HTTP routes for registering and authenticating
//! users, and for logging and querying transactions, backed by a SQLite
//! database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod json;
mod logging;
mod password;
mod path_param;
mod routing;
mod transaction;
mod user;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use password::PasswordHash;
pub use routing::build_router;
pub use transaction::{NewTransaction, Transaction, count_transactions, create_transaction};
pub use user::{NewUser, User, UserID, UserResponse, count_users, create_user};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body was not declared as JSON.
    #[error("the request body must be JSON")]
    InvalidContentType,

    /// The request body or a path parameter could not be parsed, or a required
    /// field was missing.
    ///
    /// The first field is the HTTP status code that should be sent to the
    /// client, the second is a description of the problem.
    #[error("invalid request body: {1}")]
    InvalidRequestBody(StatusCode, String),

    /// The request body is longer than the server will read.
    #[error("the request body is too large")]
    RequestBodyTooLarge,

    /// The email used to register a user already belongs to another user.
    #[error("the email is already registered")]
    DuplicateEmail,

    /// The email and password did not match a registered user.
    #[error("user not authenticated")]
    NotAuthenticated,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the path
    /// parameters (e.g., email) are correct and that the resource has been
    /// created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidContentType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Error: Data must be JSON".to_owned(),
            ),
            Error::InvalidRequestBody(status, description) => {
                (status, format!("Error: {description}"))
            }
            Error::RequestBodyTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Error: The request body is too large.".to_owned(),
            ),
            Error::DuplicateEmail => (
                StatusCode::CONFLICT,
                "Error: That email is already registered.".to_owned(),
            ),
            Error::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "User not authenticated".to_owned(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "Error: The requested resource could not be found.".to_owned(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error: An internal error occurred.".to_owned(),
                )
            }
        };

        (status, Json(message)).into_response()
    }
}
