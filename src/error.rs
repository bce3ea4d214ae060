use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;
use crate::views::RenderError;

/// Errors a page handler can answer with. Bodies are fixed strings.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid event id {0:?}")]
    InvalidEventId(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidEventId(_) => (StatusCode::BAD_REQUEST, "Invalid Event ID"),
            AppError::Store(StoreError::EventNotFound(_)) => (StatusCode::NOT_FOUND, "Event Not Found"),
            AppError::Render(e) => {
                tracing::error!("Rendering failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn maps_each_error_to_its_status() {
        let cases = [
            (AppError::InvalidEventId("abc".into()), StatusCode::BAD_REQUEST),
            (AppError::from(StoreError::EventNotFound(9)), StatusCode::NOT_FOUND),
            (AppError::from(RenderError::from(fmt::Error)), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
