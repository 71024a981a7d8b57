use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::text::normalize_text;
use crate::domain::shared::value_objects::Language;

use super::errors::SuggestionError;

pub const MAX_HISTORY_ENTRIES: usize = 20;

/// A past query and how often it was asked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedQuery {
    pub text: String,
    pub count: u32,
    pub last_used_at: DateTime<Utc>,
}

/// Bounded ranked list of past queries backing the suggestion chips.
///
/// Ranked by count, then by recency. The lowest-ranked entry is evicted
/// when the list is full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryHistory {
    pub entries: Vec<RankedQuery>,
}

impl QueryHistory {
    pub fn record(&mut self, text: &str, now: DateTime<Utc>) -> Result<(), SuggestionError> {
        let trimmed = text.trim();
        let key = normalize_text(trimmed);
        if key.is_empty() {
            return Err(SuggestionError::InvalidQuery);
        }

        match self
            .entries
            .iter_mut()
            .find(|entry| normalize_text(&entry.text) == key)
        {
            Some(entry) => {
                entry.count = entry.count.saturating_add(1);
                entry.last_used_at = now;
                entry.text = trimmed.to_string();
            }
            None => self.entries.push(RankedQuery {
                text: trimmed.to_string(),
                count: 1,
                last_used_at: now,
            }),
        }

        self.entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.last_used_at.cmp(&a.last_used_at))
        });
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        Ok(())
    }

    pub fn top(&self, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(limit)
            .map(|entry| entry.text.clone())
            .collect()
    }
}

/// Chips shown before the user has asked anything.
pub fn default_suggestions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &[
            "A red wine for a barbecue",
            "Something sparkling to celebrate",
            "A white wine for fish under 15",
            "A premium bottle as a gift",
        ],
        Language::Fr => &[
            "Un vin rouge pour un barbecue",
            "Des bulles pour fêter un anniversaire",
            "Un vin blanc pour le poisson à moins de 15 €",
            "Une bouteille haut de gamme à offrir",
        ],
        Language::Nl => &[
            "Een rode wijn voor de barbecue",
            "Iets mousserends om te vieren",
            "Een witte wijn bij vis onder 15 euro",
            "Een exclusieve fles als cadeau",
        ],
    }
}
