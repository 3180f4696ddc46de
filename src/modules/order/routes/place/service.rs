use super::types::{request, response};
use crate::{
    types::Context,
    utils::notification::{self, Backend, Notification},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: Option<request::Payload>) -> response::Response {
    // Configuration is a precondition of the whole endpoint, so it is
    // checked before the payload is even looked at.
    if ctx.slack.webhook_url.is_none() {
        tracing::error!("SLACK_WEBHOOK_URL is not set; cannot accept orders");
        return Err(response::Error::ServerConfigurationError);
    }

    let order = payload
        .and_then(request::Payload::into_order)
        .ok_or(response::Error::InvalidOrderData)?;

    tracing::debug!("Received order: {:?}", order);

    notification::send(ctx, Notification::order_placed(order), Backend::Slack)
        .await
        .map_err(|err| match err {
            notification::Error::NotConfigured => response::Error::ServerConfigurationError,
            notification::Error::NotSent => response::Error::FailedToSendNotification,
        })?;

    Ok(response::Success::OrderReceived)
}
