//! A JSON body extractor that reports rejections with the application's [Error] type.

use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::Error;

/// Extracts a JSON request body, like [axum::Json], but rejects bad requests
/// with an [Error] so clients get the same kind of error body as every other
/// failure.
///
/// A request without a `Content-Type: application/json` header is rejected
/// with [Error::InvalidContentType]. A missing or null required field is
/// rejected with [Error::InvalidRequestBody].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Error::InvalidContentType,
            rejection => Error::InvalidRequestBody(rejection.status(), rejection.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde::Deserialize;

    use crate::{Error, json::JsonBody};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        email: String,
        date: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Payload, Error> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_owned())).unwrap();

        JsonBody::<Payload>::from_request(request, &())
            .await
            .map(|JsonBody(payload)| payload)
    }

    #[tokio::test]
    async fn extracts_json_body() {
        let payload = extract(Some("application/json"), r#"{"email": "a@x.com"}"#).await;

        assert_eq!(
            payload,
            Ok(Payload {
                email: "a@x.com".to_owned(),
                date: None
            })
        );
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let payload = extract(None, r#"{"email": "a@x.com"}"#).await;

        assert_eq!(payload, Err(Error::InvalidContentType));
    }

    #[tokio::test]
    async fn rejects_non_json_content_type() {
        let payload = extract(Some("text/plain"), r#"{"email": "a@x.com"}"#).await;

        assert_eq!(payload, Err(Error::InvalidContentType));
    }

    #[tokio::test]
    async fn rejects_missing_required_field() {
        let payload = extract(Some("application/json"), r#"{"date": "2024-01-01"}"#).await;

        assert!(
            matches!(
                payload,
                Err(Error::InvalidRequestBody(StatusCode::UNPROCESSABLE_ENTITY, _))
            ),
            "got {payload:?}"
        );
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let payload = extract(Some("application/json"), r#"{"email": "#).await;

        assert!(
            matches!(
                payload,
                Err(Error::InvalidRequestBody(StatusCode::BAD_REQUEST, _))
            ),
            "got {payload:?}"
        );
    }
}
