use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

// Json<Option<_>> so a literal `null` body lands in validation instead of
// being bounced by the extractor.
pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<Option<request::Payload>>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
