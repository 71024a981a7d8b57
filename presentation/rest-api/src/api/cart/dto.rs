use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::CartEntry;
use business::domain::cart::use_cases::get::CartSummary;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub item_id: String,
    /// 1 to 10 (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// 1 to 10
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartEntryResponse {
    pub item_id: String,
    pub quantity: u8,
    pub added_at: DateTime<Utc>,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        Self {
            item_id: entry.item_id,
            quantity: entry.quantity,
            added_at: entry.added_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntryResponse>,
    /// Sum of price times quantity against the current catalog
    pub total: f64,
    /// Number of bottles
    pub item_count: u32,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            entries: summary
                .cart
                .entries
                .into_iter()
                .map(CartEntryResponse::from)
                .collect(),
            total: (summary.total * 100.0).round() / 100.0,
            item_count: summary.item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::Cart;

    #[test]
    fn should_round_total_to_cents() {
        let mut cart = Cart::default();
        cart.add("42", 3, Utc::now()).unwrap();

        let response = CartResponse::from(CartSummary {
            cart,
            total: 3.0 * 19.9,
            item_count: 3,
        });

        assert_eq!(response.total, 59.7);
        assert_eq!(response.entries[0].item_id, "42");
        assert_eq!(response.item_count, 3);
    }
}
