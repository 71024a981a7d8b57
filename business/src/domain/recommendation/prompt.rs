use rand::seq::SliceRandom;

use crate::domain::catalog::model::CatalogItem;
use crate::domain::catalog::pricing::parse_volume;
use crate::domain::shared::value_objects::Language;

use super::model::{ChatMessage, RecommendationQuery};

/// Token that opens the machine-parseable line at the end of a reply.
pub const MARKER: &str = "RECOMMENDED_IDS:";

pub const DEFAULT_SAMPLE_SIZE: usize = 40;

/// Prior turns kept as prompt context.
pub const MAX_HISTORY_TURNS: usize = 10;

const PERSONA_EN: &str = r#"You are the in-store sommelier of a wine shop, chatting with a customer on the shop's website.
Style:
- Warm, concise and concrete: 3 to 5 short sentences before the list.
- Recommend only wines from the catalog below; never invent wines or prices.
- Present each recommendation as a numbered line "1. <exact wine name>" followed by one short reason.
- Mention promotions when a recommended wine has one."#;

const PERSONA_FR: &str = r#"Tu es le sommelier d'une cave à vins et tu réponds à un client sur le site de la boutique.
Style :
- Chaleureux, concis et concret : 3 à 5 phrases courtes avant la liste.
- Recommande uniquement des vins du catalogue ci-dessous ; n'invente jamais de vin ni de prix.
- Présente chaque recommandation sur une ligne numérotée "1. <nom exact du vin>" suivie d'une courte justification.
- Signale les promotions lorsqu'un vin recommandé en a une.
Réponds en français."#;

const PERSONA_NL: &str = r#"Je bent de sommelier van een wijnwinkel en je helpt een klant via de website van de winkel.
Stijl:
- Hartelijk, beknopt en concreet: 3 tot 5 korte zinnen voor de lijst.
- Raad alleen wijnen uit de onderstaande catalogus aan; verzin nooit wijnen of prijzen.
- Toon elke aanbeveling als een genummerde regel "1. <exacte wijnnaam>" gevolgd door een korte reden.
- Vermeld promoties wanneer een aanbevolen wijn er een heeft.
Antwoord in het Nederlands."#;

const PAIRING_RULES: &str = r#"Food pairing heuristics:
- Red meat, game, barbecue: structured reds (Cabernet Sauvignon, Syrah, Malbec, Bordeaux, Rioja).
- Poultry, pork, mushrooms: light reds (Pinot Noir, Beaujolais) or rich whites (oaked Chardonnay).
- Fish and seafood: crisp whites (Sauvignon Blanc, Muscadet, Chablis, Albariño) or sparkling.
- Shellfish and oysters: Muscadet, Chablis, Champagne.
- Spicy or Asian dishes: off-dry whites (Riesling, Gewürztraminer) or fruity rosé.
- Cheese: match intensity; soft cheese with white or sparkling, hard cheese with red.
- Salads, summer dishes, aperitif: rosé or sparkling.
- Desserts: sweet or sparkling wines; avoid dry tannic reds.
- Celebrations: Champagne, Crémant, Cava or Prosecco."#;

fn persona(language: Language) -> &'static str {
    match language {
        Language::En => PERSONA_EN,
        Language::Fr => PERSONA_FR,
        Language::Nl => PERSONA_NL,
    }
}

/// Controls how the catalog sample is drawn.
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub sample_size: usize,
    /// Shuffle before sampling to reduce positional bias.
    pub shuffle: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            shuffle: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub system_prompt: String,
    pub user_prompt: String,
    /// Ids the model was allowed to choose from.
    pub sampled_ids: Vec<String>,
}

fn sample_candidates<'a>(candidates: &'a [CatalogItem], options: &PromptOptions) -> Vec<&'a CatalogItem> {
    let mut sample: Vec<&CatalogItem> = candidates.iter().collect();
    if options.shuffle {
        sample.shuffle(&mut rand::rng());
    }
    sample.truncate(options.sample_size);
    sample
}

fn catalog_line(item: &CatalogItem) -> String {
    let attributes = &item.attributes;
    let mut fields = vec![format!("id: \"{}\"", item.id), item.name.clone(), item.price.clone()];

    if let Some(volume) = &attributes.volume {
        fields.push(parse_volume(volume));
    }
    if let Some(color) = item.color() {
        fields.push(color.to_string());
    }
    if attributes.promotion {
        let text = attributes.promotion_text.as_deref().unwrap_or("on promotion");
        fields.push(format!("promo: {}", text));
    }

    format!("- {}", fields.join(" | "))
}

fn history_block(history: &[ChatMessage]) -> String {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    history[start..]
        .iter()
        .map(|message| format!("{}: {}", message.role, message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles the system and user prompts for one chat turn.
pub fn build_prompt(
    query: &RecommendationQuery,
    candidates: &[CatalogItem],
    options: &PromptOptions,
) -> Prompt {
    let sample = sample_candidates(candidates, options);
    let sampled_ids: Vec<String> = sample.iter().map(|item| item.id.clone()).collect();
    let catalog = sample
        .iter()
        .map(|item| catalog_line(item))
        .collect::<Vec<_>>()
        .join("\n");

    let system_prompt = format!(
        "{}\n\n{}\n\nCATALOG (id | name | price | volume | color | promotion):\n{}",
        persona(query.language),
        PAIRING_RULES,
        catalog
    );

    let mut user_prompt = String::new();

    if !query.history.is_empty() {
        user_prompt.push_str("Conversation so far:\n");
        user_prompt.push_str(&history_block(&query.history));
        user_prompt.push_str("\n\n");
    }

    user_prompt.push_str(&format!("Customer request: {}\n\n", query.text.trim()));

    if !query.exclude_ids.is_empty() {
        let mut excluded: Vec<&str> = query.exclude_ids.iter().map(String::as_str).collect();
        excluded.sort_unstable();
        user_prompt.push_str(&format!(
            "Do NOT recommend these ids, the customer has already seen them: {}\n\n",
            excluded.join(", ")
        ));
    }

    user_prompt.push_str(&format!(
        r#"Recommend up to 8 wines, best match first.
End your reply with exactly one final line in this format and nothing after it:
{} ["id1", "id2", "id3"]
Use only ids from the catalog above, in the same order as your recommendations."#,
        MARKER
    ));

    Prompt {
        system_prompt,
        user_prompt,
        sampled_ids,
    }
}
