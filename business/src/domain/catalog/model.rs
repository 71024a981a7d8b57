use serde::{Deserialize, Serialize};

use crate::domain::shared::text::{contains_words, normalize_text};

use super::pricing::parse_price;

/// Wine color category used by the pre-filter, the degraded mode and the
/// category fallback of the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WineColor {
    Red,
    White,
    Sparkling,
    Rose,
}

impl WineColor {
    /// Fixed order in which the category fallback picks representatives.
    pub const FALLBACK_ORDER: [WineColor; 4] = [
        WineColor::Red,
        WineColor::White,
        WineColor::Sparkling,
        WineColor::Rose,
    ];

    /// Classifies a display name by curated substrings.
    ///
    /// Checked in the order sparkling, rosé, red, white so that
    /// "Blanc de Noirs Brut" is sparkling and "Cabernet Sauvignon" is red.
    pub fn from_display_name(name: &str) -> Option<WineColor> {
        let normalized = normalize_text(name);
        [
            (WineColor::Sparkling, SPARKLING_TERMS),
            (WineColor::Rose, ROSE_TERMS),
            (WineColor::Red, RED_TERMS),
            (WineColor::White, WHITE_TERMS),
        ]
        .into_iter()
        .find(|(_, terms)| terms.iter().any(|t| contains_words(&normalized, t)))
        .map(|(color, _)| color)
    }
}

const SPARKLING_TERMS: &[&str] = &[
    "champagne",
    "cava",
    "prosecco",
    "cremant",
    "sparkling",
    "brut",
    "mousseux",
    "petillant",
    "spumante",
    "franciacorta",
    "sekt",
];

const ROSE_TERMS: &[&str] = &["rose", "rosato", "rosado", "blush"];

const RED_TERMS: &[&str] = &[
    "red",
    "rouge",
    "rood",
    "tinto",
    "rosso",
    "cabernet",
    "merlot",
    "pinot noir",
    "syrah",
    "shiraz",
    "malbec",
    "grenache",
    "tempranillo",
    "bordeaux",
    "rioja",
    "chianti",
    "beaujolais",
    "primitivo",
    "zinfandel",
];

const WHITE_TERMS: &[&str] = &[
    "white",
    "blanc",
    "wit",
    "bianco",
    "blanco",
    "chardonnay",
    "sauvignon",
    "riesling",
    "pinot grigio",
    "pinot gris",
    "chablis",
    "viognier",
    "muscadet",
    "gewurztraminer",
    "verdejo",
    "albarino",
];

impl std::fmt::Display for WineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WineColor::Red => write!(f, "red"),
            WineColor::White => write!(f, "white"),
            WineColor::Sparkling => write!(f, "sparkling"),
            WineColor::Rose => write!(f, "rose"),
        }
    }
}

impl std::str::FromStr for WineColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_text(s).as_str() {
            "red" | "rouge" | "rood" => Ok(WineColor::Red),
            "white" | "blanc" | "wit" => Ok(WineColor::White),
            "sparkling" | "mousseux" | "petillant" | "mousserend" => Ok(WineColor::Sparkling),
            "rose" => Ok(WineColor::Rose),
            _ => Err(format!("Invalid wine color: {}", s)),
        }
    }
}

/// Descriptive attributes of a catalog item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WineAttributes {
    pub color: Option<WineColor>,
    pub wine_type: Option<String>,
    pub volume: Option<String>,
    pub origin: Option<String>,
    pub pairings: Vec<String>,
    pub promotion: bool,
    pub promotion_text: Option<String>,
    pub vintage: Option<u16>,
}

/// A purchasable wine from a language's catalog. Immutable once loaded.
///
/// `price` keeps the locale-formatted text; the numeric value is derived
/// with [`CatalogItem::price_value`] every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: String,
    pub attributes: WineAttributes,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            attributes: WineAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: WineAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn price_value(&self) -> f64 {
        parse_price(&self.price)
    }

    /// Color attribute, or the display-name classification when absent.
    pub fn color(&self) -> Option<WineColor> {
        self.attributes
            .color
            .or_else(|| WineColor::from_display_name(&self.name))
    }
}
