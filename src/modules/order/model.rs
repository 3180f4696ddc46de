use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub landmark: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// The order as submitted by the storefront. Everything the caller could
/// leave out is optional here; `into_order` is the only way to get a
/// usable [`Order`] out of it.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer: Option<Customer>,
    pub items: Option<Vec<Item>>,
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub total_price: f64,
}

#[derive(Clone, Debug)]
pub struct Order {
    pub customer: Customer,
    pub items: Vec<Item>,
    pub special_instructions: Option<String>,
    pub total_price: f64,
}

impl OrderPayload {
    /// Checks the minimum shape required to notify the kitchen: a customer
    /// and at least one item. Numeric ranges are not checked.
    pub fn into_order(self) -> Option<Order> {
        let customer = self.customer?;
        let items = self.items.filter(|items| !items.is_empty())?;

        Some(Order {
            customer,
            items,
            special_instructions: self.special_instructions,
            total_price: self.total_price,
        })
    }
}
