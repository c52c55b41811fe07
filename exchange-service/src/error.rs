//! Maps order book rejections and malformed bodies onto HTTP responses.
//!
//! Every error leaves with the same body: `{"error": <message>, "code": <status>}`.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orderbook::OrderBookError;
use tracing::warn;

#[derive(Debug)]
pub enum AppError {
    /// The book refused the operation.
    Rejected(OrderBookError),
    /// The request body could not be decoded.
    BadBody(JsonRejection),
}

impl From<OrderBookError> for AppError {
    fn from(err: OrderBookError) -> Self {
        AppError::Rejected(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadBody(rejection)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Rejected(err) => match err {
                OrderBookError::InvalidPrice(_)
                | OrderBookError::InvalidQuantity(_)
                | OrderBookError::CrossesBook { .. } => StatusCode::BAD_REQUEST,
                OrderBookError::NotFound { .. } => StatusCode::NOT_FOUND,
                OrderBookError::NotReady | OrderBookError::InsufficientLiquidity { .. } => {
                    StatusCode::CONFLICT
                }
            },
            AppError::BadBody(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Rejected(err) => err.to_string(),
            AppError::BadBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        warn!(error = %message, status = status.as_u16(), "request rejected");

        let body = Json(serde_json::json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejection is an [`AppError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
