use crate::domain::catalog::model::{CatalogItem, WineColor};
use crate::domain::shared::text::normalize_text;
use crate::domain::shared::value_objects::Language;

pub const DEGRADED_RECOMMENDATION_COUNT: usize = 4;

/// Canned reply used when the completion service is unavailable.
pub fn degraded_message(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Our sommelier assistant is taking a short break, but here is a selection from our shelves that fits your request."
        }
        Language::Fr => {
            "Notre sommelier virtuel fait une courte pause, mais voici une sélection de notre cave qui correspond à votre demande."
        }
        Language::Nl => {
            "Onze virtuele sommelier neemt even pauze, maar hier is een selectie uit ons assortiment die bij uw vraag past."
        }
    }
}

/// Asked when the pre-filter left nothing to recommend.
pub fn clarification_message(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I couldn't find any wine matching all of that. Could you loosen the budget or tell me a bit more about the occasion?"
        }
        Language::Fr => {
            "Je n'ai trouvé aucun vin correspondant à tous ces critères. Pourriez-vous assouplir le budget ou m'en dire plus sur l'occasion ?"
        }
        Language::Nl => {
            "Ik vond geen wijn die aan alles voldoet. Kunt u het budget wat ruimer nemen of iets meer vertellen over de gelegenheid?"
        }
    }
}

fn color_for_token(token: &str) -> Option<WineColor> {
    match token {
        "red" | "rouge" | "rood" | "rode" => Some(WineColor::Red),
        "white" | "blanc" | "wit" | "witte" => Some(WineColor::White),
        "rose" => Some(WineColor::Rose),
        "sparkling" | "champagne" | "bubbles" | "petillant" | "mousseux" | "bubbels"
        | "mousserend" => Some(WineColor::Sparkling),
        _ => None,
    }
}

/// First color keyword in the raw query, in reading order.
pub fn color_keyword(query: &str) -> Option<WineColor> {
    normalize_text(query).split(' ').find_map(color_for_token)
}

/// Deterministic recommendations for degraded mode.
///
/// The first `count` candidates of the requested color; when the query names
/// no color, or none of the candidates has it, the first `count` candidates.
pub fn degraded_recommendations(
    candidates: &[CatalogItem],
    query: &str,
    count: usize,
) -> Vec<CatalogItem> {
    let by_color: Vec<CatalogItem> = match color_keyword(query) {
        Some(color) => candidates
            .iter()
            .filter(|item| item.color() == Some(color))
            .take(count)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    if by_color.is_empty() {
        candidates.iter().take(count).cloned().collect()
    } else {
        by_color
    }
}
