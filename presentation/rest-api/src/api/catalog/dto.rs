use poem_openapi::Object;

use business::domain::catalog::model::{CatalogItem, WineAttributes, WineColor};
use business::domain::catalog::pricing::parse_volume;

/// A wine as exchanged with the widget, both in catalog listings and in the
/// `wines` field of recommendation requests.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: String,
    /// Display name
    pub name: String,
    /// Locale-formatted price text, e.g. "12,50 €"
    pub price: String,
    /// red, white, sparkling or rose
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    #[oai(rename = "type", skip_serializing_if_is_none)]
    pub wine_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub volume: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub origin: Option<String>,
    #[oai(default)]
    pub pairings: Vec<String>,
    #[oai(default)]
    pub promotion: bool,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_text: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub vintage: Option<u16>,
}

impl From<CatalogItem> for CatalogItemDto {
    fn from(item: CatalogItem) -> Self {
        let color = item.color().map(|c| c.to_string());
        let attributes = item.attributes;
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            color,
            wine_type: attributes.wine_type,
            volume: attributes.volume.as_deref().map(parse_volume),
            origin: attributes.origin,
            pairings: attributes.pairings,
            promotion: attributes.promotion,
            promotion_text: attributes.promotion_text,
            vintage: attributes.vintage,
        }
    }
}

impl CatalogItemDto {
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
