use std::collections::HashSet;

use crate::domain::catalog::model::{CatalogItem, WineColor};

/// Color shared by every item, if any.
fn common_color(items: &[CatalogItem]) -> Option<WineColor> {
    let first = items.first()?.color()?;
    items
        .iter()
        .all(|item| item.color() == Some(first))
        .then_some(first)
}

/// Extends `items` with unshown pool items until `target` is reached.
///
/// When every recommended item shares a color, pool items of that color are
/// taken first. Order of `items` is preserved and duplicates are dropped.
pub fn pad_recommendations(
    items: &[CatalogItem],
    pool: &[CatalogItem],
    exclude_ids: &HashSet<String>,
    target: usize,
) -> Vec<CatalogItem> {
    let mut used: HashSet<String> = exclude_ids.clone();
    let mut padded: Vec<CatalogItem> = items
        .iter()
        .filter(|item| used.insert(item.id.clone()))
        .cloned()
        .collect();

    if padded.len() >= target {
        return padded;
    }

    let preferred = common_color(&padded);

    let same_color = pool
        .iter()
        .filter(|item| preferred.is_some() && item.color() == preferred);
    let any_color = pool.iter();

    for item in same_color.chain(any_color) {
        if padded.len() >= target {
            break;
        }
        if used.insert(item.id.clone()) {
            padded.push(item.clone());
        }
    }

    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::WineAttributes;

    fn wine(id: &str, color: WineColor) -> CatalogItem {
        CatalogItem::new(id, format!("Cuvée {}", id), "10,00 €").with_attributes(WineAttributes {
            color: Some(color),
            ..Default::default()
        })
    }

    fn ids(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn should_pad_with_same_color_first() {
        let items = vec![wine("r1", WineColor::Red)];
        let pool = vec![
            wine("w1", WineColor::White),
            wine("r1", WineColor::Red),
            wine("r2", WineColor::Red),
            wine("w2", WineColor::White),
            wine("r3", WineColor::Red),
        ];

        let padded = pad_recommendations(&items, &pool, &HashSet::new(), 5);

        assert_eq!(ids(&padded), vec!["r1", "r2", "r3", "w1", "w2"]);
    }

    #[test]
    fn should_pad_in_pool_order_when_colors_mixed() {
        let items = vec![wine("r1", WineColor::Red), wine("w1", WineColor::White)];
        let pool = vec![
            wine("s1", WineColor::Sparkling),
            wine("r2", WineColor::Red),
            wine("w1", WineColor::White),
        ];

        let padded = pad_recommendations(&items, &pool, &HashSet::new(), 4);

        assert_eq!(ids(&padded), vec!["r1", "w1", "s1", "r2"]);
    }

    #[test]
    fn should_skip_excluded_pool_items() {
        let items = vec![wine("r1", WineColor::Red)];
        let pool = vec![wine("r2", WineColor::Red), wine("r3", WineColor::Red)];
        let exclude: HashSet<String> = ["r2".to_string()].into();

        let padded = pad_recommendations(&items, &pool, &exclude, 10);

        assert_eq!(ids(&padded), vec!["r1", "r3"]);
    }

    #[test]
    fn should_keep_model_items_beyond_target() {
        let items: Vec<CatalogItem> = (0..6).map(|i| wine(&i.to_string(), WineColor::Red)).collect();

        let padded = pad_recommendations(&items, &[], &HashSet::new(), 4);

        assert_eq!(padded.len(), 6);
    }
}
