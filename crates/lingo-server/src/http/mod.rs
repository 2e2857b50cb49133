pub mod things;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use lingo_core::app::{App, ErrorBody};
use lingo_core::domain::LingoError;
use serde::de::DeserializeOwned;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub fn router(app: App) -> Router {
    Router::new()
        .route("/things", get(things::get_all).post(things::create_item))
        .route("/things/:partition_id", get(things::get_by_partition))
        .route("/things/:partition_id/:sort_id", put(things::update_item))
        .route(
            "/things/:partition_id/:sort_id/translation",
            get(things::get_translation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app)
}

/// Operation error rendered as `{message}` with its status class.
#[derive(Debug)]
pub struct ApiError(LingoError);

impl ApiError {
    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            LingoError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LingoError::NotFound(_) => StatusCode::NOT_FOUND,
            LingoError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LingoError> for ApiError {
    fn from(err: LingoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        (status, Json(ErrorBody::new(self.0.message()))).into_response()
    }
}

/// Decode a JSON body; an empty body is `T::default()`.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        ApiError(LingoError::InvalidRequest(format!(
            "request body is not valid JSON: {err}"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::app::CreateItemRequest;

    #[test]
    fn empty_body_is_default() {
        let req: CreateItemRequest = parse_body(&Bytes::from_static(b"  \n")).unwrap();
        assert_eq!(req, CreateItemRequest::default());
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = parse_body::<CreateItemRequest>(&Bytes::from_static(b"{not json")).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
