use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::CatalogItem;

use super::errors::CartError;

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;
pub const MAX_CART_ENTRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item_id: String,
    pub quantity: u8,
    pub added_at: DateTime<Utc>,
}

/// At most one entry per item id, at most [`MAX_CART_ENTRIES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub entries: Vec<CartEntry>,
}

fn validate_quantity(quantity: u8) -> Result<u8, CartError> {
    if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        Ok(quantity)
    } else {
        Err(CartError::InvalidQuantity)
    }
}

impl Cart {
    /// Adds an item, or increases the quantity of an existing entry
    /// (clamped to [`MAX_QUANTITY`]).
    pub fn add(&mut self, item_id: &str, quantity: u8, now: DateTime<Utc>) -> Result<(), CartError> {
        let quantity = validate_quantity(quantity)?;

        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity = entry.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            return Ok(());
        }

        if self.entries.len() >= MAX_CART_ENTRIES {
            return Err(CartError::Full);
        }

        self.entries.push(CartEntry {
            item_id: item_id.to_string(),
            quantity,
            added_at: now,
        });
        Ok(())
    }

    pub fn update_quantity(&mut self, item_id: &str, quantity: u8) -> Result<(), CartError> {
        let quantity = validate_quantity(quantity)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.item_id == item_id)
            .ok_or(CartError::NotFound)?;
        entry.quantity = quantity;
        Ok(())
    }

    pub fn remove(&mut self, item_id: &str) -> Result<(), CartError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.item_id != item_id);
        if self.entries.len() == before {
            return Err(CartError::NotFound);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| u32::from(e.quantity)).sum()
    }

    /// Sum of price times quantity. Ids missing from the catalog count as 0.
    pub fn total(&self, catalog: &[CatalogItem]) -> f64 {
        let prices: HashMap<&str, f64> = catalog
            .iter()
            .map(|item| (item.id.as_str(), item.price_value()))
            .collect();

        self.entries
            .iter()
            .map(|e| prices.get(e.item_id.as_str()).copied().unwrap_or(0.0) * f64::from(e.quantity))
            .sum()
    }
}
