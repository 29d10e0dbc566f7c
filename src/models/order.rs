use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_ORDER_STATUS: &str = "pending";
pub const ORDER_RECEIVED: &str = "received";

fn default_status() -> String {
    DEFAULT_ORDER_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_id: String,
    pub title: String,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub price: f64,
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub quantity: i64,
    pub image: Option<String>,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

/// Document stored in the `order` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    pub customer: Customer,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub total: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Order {
    /// Sum of item subtotals rounded to cents.
    pub fn computed_total(&self) -> f64 {
        let total: f64 = self.items.iter().map(OrderItem::subtotal).sum();
        round_cents(total)
    }

    /// Replaces the client-supplied total with the computed one.
    pub fn with_computed_total(mut self) -> Self {
        self.total = self.computed_total();
        self
    }
}

/// Rounds the exact binary value of `value` to two places, ties to even.
fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

// Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: String,
    pub status: String,
}

impl OrderReceipt {
    pub fn received(id: String) -> Self {
        Self {
            id,
            status: ORDER_RECEIVED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(price: f64, quantity: i64) -> OrderItem {
        OrderItem {
            product_id: "p1".to_string(),
            title: "Item".to_string(),
            price,
            quantity,
            image: None,
        }
    }

    fn order(items: Vec<OrderItem>, total: f64) -> Order {
        Order {
            items,
            customer: Customer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                address: None,
            },
            total,
            status: default_status(),
        }
    }

    #[rstest]
    #[case(vec![item(10.0, 2), item(5.0, 1)], 25.0)]
    #[case(vec![item(0.1, 3)], 0.3)]
    #[case(vec![item(19.999, 1)], 20.0)]
    #[case(vec![item(0.125, 1)], 0.12)]
    #[case(vec![item(0.375, 1)], 0.38)]
    #[case(vec![item(2.675, 1)], 2.67)]
    #[case(vec![item(1.005, 1)], 1.0)]
    #[case(vec![], 0.0)]
    fn computed_total_rounds_to_cents(#[case] items: Vec<OrderItem>, #[case] expected: f64) {
        assert_eq!(order(items, 0.0).computed_total(), expected);
    }

    #[test]
    fn computed_total_overrides_client_total() {
        let order = order(vec![item(10.0, 2), item(5.0, 1)], 999.0).with_computed_total();

        assert_eq!(order.total, 25.0);
    }

    #[rstest]
    #[case(item(10.0, 0))]
    #[case(item(-1.0, 1))]
    fn invalid_items_fail_validation(#[case] bad: OrderItem) {
        assert!(order(vec![bad], 0.0).validate().is_err());
    }

    #[test]
    fn negative_total_fails_validation() {
        assert!(order(vec![item(1.0, 1)], -0.5).validate().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "items": [],
            "customer": { "name": "Ada", "email": "ada@example.com" },
            "total": 0
        }))
        .unwrap();

        assert_eq!(order.status, "pending");
        assert_eq!(order.customer.address, None);
    }
}
