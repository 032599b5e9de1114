//! Defines the endpoints for reading users.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::lock_connection,
    path_param::PathParam,
    user::{UserResponse, UserState, get_all_users, get_user_by_email},
};

/// A route handler for listing every registered user.
///
/// Password hashes are not included in the response.
pub async fn get_users_endpoint(
    State(state): State<UserState>,
) -> Result<Json<Vec<UserResponse>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let users = get_all_users(&connection)?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

/// A route handler for getting a user by their email.
///
/// This function will return [Error::NotFound] if no user has registered with
/// `email`. Password hashes are not included in the response.
pub async fn get_user_by_email_endpoint(
    State(state): State<UserState>,
    PathParam(email): PathParam<String>,
) -> Result<Json<UserResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_user_by_email(&email, &connection)
        .map(UserResponse::from)
        .map(Json)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;

    use crate::{
        Error, PasswordHash,
        db::initialize,
        path_param::PathParam,
        user::{NewUser, User, UserResponse, UserState, create_user},
    };

    use super::{get_user_by_email_endpoint, get_users_endpoint};

    fn get_test_state() -> UserState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        UserState {
            db_connection: Arc::new(Mutex::new(conn)),
            hash_cost: 4,
        }
    }

    fn insert_user(state: &UserState, email: &str, name: &str) -> User {
        create_user(
            NewUser {
                email: email.to_owned(),
                password_hash: PasswordHash::new_unchecked("$2b$04$notarealhash"),
                name: name.to_owned(),
            },
            &state.db_connection.lock().unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_no_users_on_empty_database() {
        let state = get_test_state();

        let users = get_users_endpoint(State(state)).await.unwrap();

        assert_eq!(users.0, vec![]);
    }

    #[tokio::test]
    async fn lists_all_users() {
        let state = get_test_state();
        let ann = insert_user(&state, "a@x.com", "Ann");
        let bob = insert_user(&state, "b@x.com", "Bob");

        let users = get_users_endpoint(State(state)).await.unwrap();

        assert_eq!(
            users.0,
            vec![UserResponse::from(ann), UserResponse::from(bob)]
        );
    }

    #[tokio::test]
    async fn gets_user_by_email() {
        let state = get_test_state();
        insert_user(&state, "a@x.com", "Ann");
        let bob = insert_user(&state, "b@x.com", "Bob");

        let user = get_user_by_email_endpoint(State(state), PathParam("b@x.com".to_owned()))
            .await
            .unwrap();

        assert_eq!(user.0, UserResponse::from(bob));
    }

    #[tokio::test]
    async fn get_user_by_email_fails_on_unknown_email() {
        let state = get_test_state();

        let result =
            get_user_by_email_endpoint(State(state), PathParam("nobody@x.com".to_owned()))
                .await;

        assert_eq!(result.map(|json| json.0), Err(Error::NotFound));
    }
}
