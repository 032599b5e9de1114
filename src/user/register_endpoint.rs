//! Defines the endpoint for registering a new user.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error, PasswordHash,
    db::lock_connection,
    json::JsonBody,
    user::{NewUser, UserState, create_user},
};

/// The message sent to the client after a user has been registered.
pub const USER_CREATED_MESSAGE: &str = "User has been created";

/// The request body for registering a new user.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterForm {
    /// The email to register, must not already be registered.
    pub email: String,
    /// The plaintext password, only its hash is stored.
    pub password: String,
    /// The user's display name.
    pub name: String,
}

/// A route handler for registering a new user.
///
/// # Errors
///
/// This function will return a:
/// - [Error::DuplicateEmail] if the email is already registered,
/// - [Error::HashingError] if the password could not be hashed,
/// - or [Error::SqlError] if some other SQL error occurred.
pub async fn register_user_endpoint(
    State(state): State<UserState>,
    JsonBody(form): JsonBody<RegisterForm>,
) -> Result<Json<&'static str>, Error> {
    let password_hash = PasswordHash::new(&form.password, state.hash_cost).inspect_err(|error| {
        tracing::error!("an error occurred while hashing a password: {error}");
    })?;

    let connection = lock_connection(&state.db_connection)?;

    let user = create_user(
        NewUser {
            email: form.email,
            password_hash,
            name: form.name,
        },
        &connection,
    )?;

    tracing::info!("Registered user {}", user.id);

    Ok(Json(USER_CREATED_MESSAGE))
}
