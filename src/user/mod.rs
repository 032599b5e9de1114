//! User registration and authentication.
//!
//! This module contains everything related to users:
//! - The `User` model and its public `UserResponse` projection
//! - Database functions for registering, finding, and authenticating users
//! - Route handlers for the user endpoints

mod authenticate_endpoint;
mod core;
mod get_endpoints;
mod register_endpoint;
mod state;

pub use authenticate_endpoint::authenticate_user_endpoint;
pub use self::core::{
    NewUser, User, UserID, UserResponse, authenticate, count_users, create_user,
    create_user_table, get_all_users, get_user_by_email,
};
pub use get_endpoints::{get_user_by_email_endpoint, get_users_endpoint};
pub use register_endpoint::register_user_endpoint;
pub use state::UserState;
