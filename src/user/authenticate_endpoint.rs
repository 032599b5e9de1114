//! Defines the endpoint for checking a user's credentials.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    json::JsonBody,
    user::{UserState, authenticate},
};

/// The message sent to the client when the credentials are correct.
pub const AUTHENTICATED_MESSAGE: &str = "User has been authenticated.";

/// The request body for authenticating a user.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    /// Email entered during sign-in.
    pub email: String,
    /// Password entered during sign-in.
    pub password: String,
}

/// Handler for authentication requests.
///
/// No session or token is created, each request is checked on its own.
/// The password is verified on a blocking thread without holding the
/// database lock.
///
/// # Errors
///
/// This function will return an error in a few situtations.
/// - The email does not belong to a registered user.
/// - The password is not correct.
/// - An internal error occurred when verifying the password.
pub async fn authenticate_user_endpoint(
    State(state): State<UserState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Json<&'static str>, Error> {
    let db_connection = state.db_connection;
    let user = tokio::task::spawn_blocking(move || {
        authenticate(&credentials.email, &credentials.password, &db_connection)
    })
    .await
    .map_err(|error| Error::HashingError(format!("password verification task failed: {error}")))?
    .inspect_err(|error| match error {
        Error::NotAuthenticated => tracing::debug!("rejected invalid credentials"),
        error => tracing::error!("Unhandled error while verifying credentials: {error}"),
    })?;

    tracing::debug!("Authenticated user {}", user.id);

    Ok(Json(AUTHENTICATED_MESSAGE))
}
