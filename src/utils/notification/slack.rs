use super::{Error, Notification, Result};
use crate::{
    modules::order::model::{Item, Order},
    types::Context,
};
use serde::Serialize;
use std::{sync::Arc, time::Duration};

// A hanging webhook must not stall the storefront indefinitely.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Text {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub text: String,
}

impl Text {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            type_: "plain_text",
            text: text.into(),
        }
    }

    fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            type_: "mrkdwn",
            text: text.into(),
        }
    }
}

/// The subset of Slack's Block Kit the order notification uses.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Text>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<Text>>,
    },
    Divider,
}

impl Block {
    fn header(text: &str) -> Self {
        Self::Header {
            text: Text::plain(text),
        }
    }

    fn section(text: String) -> Self {
        Self::Section {
            text: Some(Text::mrkdwn(text)),
            fields: None,
        }
    }

    fn fields(fields: Vec<Text>) -> Self {
        Self::Section {
            text: None,
            fields: Some(fields),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub blocks: Vec<Block>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn item_line(item: &Item) -> String {
    format!("• *{}x* {} - {:.2} AED", item.quantity, item.name, item.price)
}

/// Lays out the order for the kitchen channel: header, customer fields,
/// item lines, optional special instructions, total.
pub fn format_order(order: &Order) -> Message {
    let mut fields = vec![
        Text::mrkdwn(format!("*Customer:*\n{}", order.customer.name)),
        Text::mrkdwn(format!("*Phone:*\n{}", order.customer.phone)),
    ];
    if let Some(address) = non_blank(&order.customer.address) {
        fields.push(Text::mrkdwn(format!("*Address:*\n{}", address)));
    }
    if let Some(landmark) = non_blank(&order.customer.landmark) {
        fields.push(Text::mrkdwn(format!("*Landmark:*\n{}", landmark)));
    }

    let items_text = order
        .items
        .iter()
        .map(item_line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut blocks = vec![
        Block::header("🍔 New Order Received! 🍔"),
        Block::fields(fields),
        Block::Divider,
        Block::section(format!("*Order Details:*\n{}", items_text)),
    ];

    if let Some(instructions) = non_blank(&order.special_instructions) {
        blocks.push(Block::Divider);
        blocks.push(Block::section(format!(
            "*Special Instructions:*\n>{}",
            instructions
        )));
    }

    blocks.push(Block::Divider);
    blocks.push(Block::section(format!(
        "*TOTAL: {:.2} AED*",
        order.total_price
    )));

    Message { blocks }
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    let webhook_url = ctx
        .slack
        .webhook_url
        .clone()
        .ok_or(Error::NotConfigured)?;

    let message = match &notification {
        Notification::OrderPlaced { order } => format_order(order),
    };

    let client = reqwest::Client::builder()
        .timeout(DELIVERY_TIMEOUT)
        .build()
        .map_err(|err| {
            tracing::error!("Failed to build Slack HTTP client: {}", err);
            Error::NotSent
        })?;

    let res = client
        .post(webhook_url)
        .json(&message)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to send order notification to Slack: {}", err);
            Error::NotSent
        })?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        tracing::error!(
            "Slack webhook rejected order notification: {} {}",
            status,
            body
        );
        return Err(Error::NotSent);
    }

    tracing::debug!("Order notification sent to Slack");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::order::model::Customer;

    fn order() -> Order {
        Order {
            customer: Customer {
                name: "Ali".to_string(),
                phone: "0501234567".to_string(),
                address: None,
                landmark: None,
            },
            items: vec![
                Item {
                    name: "Burger".to_string(),
                    quantity: 2,
                    price: 10.0,
                },
                Item {
                    name: "Fries".to_string(),
                    quantity: 1,
                    price: 5.0,
                },
            ],
            special_instructions: None,
            total_price: 25.0,
        }
    }

    fn rendered(order: &Order) -> String {
        serde_json::to_string(&format_order(order)).unwrap()
    }

    #[test]
    fn formats_item_and_total_lines() {
        let text = rendered(&order());

        assert!(text.contains("• *2x* Burger - 10.00 AED"));
        assert!(text.contains("• *1x* Fries - 5.00 AED"));
        assert!(text.contains("*TOTAL: 25.00 AED*"));
    }

    #[test]
    fn is_deterministic() {
        let order = order();

        assert_eq!(rendered(&order), rendered(&order));
    }

    #[test]
    fn renders_prices_with_two_decimals() {
        let mut order = order();
        order.items = vec![
            Item {
                name: "Shawarma".to_string(),
                quantity: 1,
                price: 5.0,
            },
            Item {
                name: "Cola".to_string(),
                quantity: 1,
                price: 5.5,
            },
            Item {
                name: "Wrap".to_string(),
                quantity: 1,
                price: 5.999,
            },
        ];
        order.total_price = 16.499;

        let text = rendered(&order);
        assert!(text.contains("Shawarma - 5.00 AED"));
        assert!(text.contains("Cola - 5.50 AED"));
        assert!(text.contains("Wrap - 6.00 AED"));
        assert!(text.contains("*TOTAL: 16.50 AED*"));
    }

    #[test]
    fn keeps_items_in_input_order_on_separate_lines() {
        let message = format_order(&order());

        let details = message
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Section {
                    text: Some(text), ..
                } if text.text.starts_with("*Order Details:*") => Some(text.text.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(
            details,
            "*Order Details:*\n• *2x* Burger - 10.00 AED\n• *1x* Fries - 5.00 AED"
        );
    }

    #[test]
    fn skips_absent_or_blank_optional_fields() {
        let mut order = order();
        order.customer.landmark = Some("   ".to_string());
        order.special_instructions = Some("".to_string());

        let text = rendered(&order);
        assert!(!text.contains("Landmark"));
        assert!(!text.contains("Address"));
        assert!(!text.contains("Special Instructions"));
    }

    #[test]
    fn renders_optional_fields_when_present() {
        let mut order = order();
        order.customer.address = Some("12 Marina Walk".to_string());
        order.customer.landmark = Some("Next to the fountain".to_string());
        order.special_instructions = Some("  No onions please  ".to_string());

        let text = rendered(&order);
        assert!(text.contains("*Address:*\\n12 Marina Walk"));
        assert!(text.contains("*Landmark:*\\nNext to the fountain"));
        assert!(text.contains("*Special Instructions:*\\n>No onions please"));
    }

    #[test]
    fn starts_with_header_and_ends_with_total() {
        let message = format_order(&order());

        assert_eq!(
            message.blocks.first().unwrap(),
            &Block::header("🍔 New Order Received! 🍔")
        );
        assert!(matches!(
            message.blocks.last().unwrap(),
            Block::Section { text: Some(text), .. } if text.text.starts_with("*TOTAL:")
        ));
    }
}
