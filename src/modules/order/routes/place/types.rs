pub mod request {
    pub use crate::modules::order::model::OrderPayload as Payload;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderReceived,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderReceived => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order received successfully!" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidOrderData,
        ServerConfigurationError,
        FailedToSendNotification,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidOrderData => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Invalid order data." })),
                )
                    .into_response(),
                Self::ServerConfigurationError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server configuration error." })),
                )
                    .into_response(),
                Self::FailedToSendNotification => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to send order notification." })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
