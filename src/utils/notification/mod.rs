pub mod slack;

use crate::{modules::order::model::Order, types::Context};
use std::sync::Arc;

pub enum Backend {
    Slack,
}

#[derive(Clone)]
pub enum Notification {
    OrderPlaced { order: Order },
}

impl Notification {
    pub fn order_placed(order: Order) -> Self {
        Self::OrderPlaced { order }
    }
}

pub enum Error {
    NotConfigured,
    NotSent,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(
    ctx: Arc<Context>,
    notification: Notification,
    backend: Backend,
) -> Result<()> {
    match backend {
        Backend::Slack => slack::send(ctx, notification).await,
    }
}
