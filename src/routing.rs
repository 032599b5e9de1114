//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    transaction::{
        create_transaction_endpoint, get_transactions_by_type_endpoint, get_transactions_endpoint,
    },
    user::{
        authenticate_user_endpoint, get_user_by_email_endpoint, get_users_endpoint,
        register_user_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Requests from any origin are allowed so that a browser front end served
/// from a different host can call the API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ADD_USER, post(register_user_endpoint))
        .route(endpoints::AUTHENTICATE_USER, post(authenticate_user_endpoint))
        .route(endpoints::USERS, get(get_users_endpoint))
        .route(endpoints::USER_BY_EMAIL, get(get_user_by_email_endpoint))
        .route(endpoints::ADD_TRANSACTION, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint))
        .route(
            endpoints::TRANSACTIONS_BY_TYPE,
            get(get_transactions_by_type_endpoint),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
