use serde::Deserialize;

use business::domain::catalog::model::{CatalogItem, WineAttributes, WineColor};

/// One record of a `data/{lang}.json` dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemEntity {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "type")]
    pub wine_type: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub pairings: Vec<String>,
    #[serde(default)]
    pub promotion: bool,
    #[serde(default)]
    pub promotion_text: Option<String>,
    #[serde(default)]
    pub vintage: Option<u16>,
}

impl CatalogItemEntity {
    pub fn into_domain(self) -> CatalogItem {
        CatalogItem::new(self.id, self.name, self.price).with_attributes(WineAttributes {
            color: self.color.and_then(|c| c.parse::<WineColor>().ok()),
            wine_type: self.wine_type,
            volume: self.volume,
            origin: self.origin,
            pairings: self.pairings,
            promotion: self.promotion,
            promotion_text: self.promotion_text,
            vintage: self.vintage,
        })
    }
}
