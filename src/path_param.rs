//! A path parameter extractor that reports rejections with the application's [Error] type.

use axum::extract::{FromRequestParts, rejection::PathRejection};

use crate::Error;

/// Extracts path parameters, like [axum::extract::Path], but rejects bad
/// parameters with an [Error] so clients get a JSON error body.
///
/// A parameter that is not valid UTF-8 once percent-decoded, or that cannot be
/// parsed into `T`, is rejected with [Error::InvalidRequestBody].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequestBody(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;

    use crate::path_param::PathParam;

    fn get_test_server() -> TestServer {
        let app = Router::new().route(
            "/echo/{value}",
            get(|PathParam(value): PathParam<String>| async move { value }),
        );

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn extracts_decoded_parameter() {
        let response = get_test_server().get("/echo/a%40x.com").await;

        response.assert_status_ok();
        response.assert_text("a@x.com");
    }

    #[tokio::test]
    async fn rejects_invalid_utf8_with_json_message() {
        let response = get_test_server().get("/echo/%FF").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let message = response.json::<String>();
        assert!(message.starts_with("Error: "), "got {message}");
    }
}
