//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/user/get/{email}', use [format_endpoint].

/// The route for registering a new user.
pub const ADD_USER: &str = "/user/add";
/// The route for checking a user's email and password.
pub const AUTHENTICATE_USER: &str = "/user/authenticate";
/// The route for listing all users.
pub const USERS: &str = "/user/get";
/// The route for getting a single user by their email.
pub const USER_BY_EMAIL: &str = "/user/get/{email}";
/// The route for logging a new transaction.
pub const ADD_TRANSACTION: &str = "/transactions/add";
/// The route for listing all transactions.
pub const TRANSACTIONS: &str = "/transactions/get";
/// The route for listing the transactions of a given type.
pub const TRANSACTIONS_BY_TYPE: &str = "/transactions/get/{type}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/user/get/{email}', '{email}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(param_end) = endpoint_path[param_start..].find('}') else {
        return endpoint_path.to_owned();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_start + param_end + 1..]
    )
}
