//! Turns a free-text model reply into an ordered list of catalog items.
//!
//! Strategies run in order and the first one producing a non-empty result
//! wins: the structured id line, numbered titles, name substrings, and
//! finally a per-category pick that never comes back empty.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::catalog::model::{CatalogItem, WineColor};
use crate::domain::shared::text::normalize_text;

pub const MAX_RECOMMENDATIONS: usize = 8;
pub const CATEGORY_FALLBACK_COUNT: usize = 4;

/// Normalized titles shorter than this never prefix-match a name.
const MIN_TITLE_LEN: usize = 3;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)RECOMMENDED[_ ]IDS\s*:\s*\[([^\]]*)\]").expect("marker pattern is valid")
});

static NUMBERED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+[.)]\s+(.+)$").expect("numbered line pattern is valid"));

const TITLE_SEPARATORS: [&str; 5] = [" - ", " – ", " — ", ": ", " ("];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    StructuredIds,
    NumberedTitles,
    NameSubstring,
    CategoryFallback,
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStrategy::StructuredIds => write!(f, "structured_ids"),
            ExtractionStrategy::NumberedTitles => write!(f, "numbered_titles"),
            ExtractionStrategy::NameSubstring => write!(f, "name_substring"),
            ExtractionStrategy::CategoryFallback => write!(f, "category_fallback"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub items: Vec<CatalogItem>,
    /// `None` only when there were no candidates at all.
    pub strategy: Option<ExtractionStrategy>,
}

type Attempt = fn(&str, &[CatalogItem]) -> Option<Vec<CatalogItem>>;

const STRATEGIES: [(ExtractionStrategy, Attempt); 4] = [
    (ExtractionStrategy::StructuredIds, structured_ids),
    (ExtractionStrategy::NumberedTitles, numbered_titles),
    (ExtractionStrategy::NameSubstring, name_substring),
    (ExtractionStrategy::CategoryFallback, category_fallback),
];

/// Extracts recommended items from `reply`, restricted to `candidates`.
///
/// Never empty when `candidates` is non-empty.
pub fn extract(reply: &str, candidates: &[CatalogItem]) -> Extraction {
    if candidates.is_empty() {
        return Extraction {
            items: Vec::new(),
            strategy: None,
        };
    }

    STRATEGIES
        .iter()
        .find_map(|(strategy, attempt)| {
            attempt(reply, candidates)
                .filter(|items| !items.is_empty())
                .map(|items| Extraction {
                    items,
                    strategy: Some(*strategy),
                })
        })
        .unwrap_or(Extraction {
            items: Vec::new(),
            strategy: None,
        })
}

/// Removes the marker list from the reply so it is not shown to the user.
pub fn strip_marker(reply: &str) -> String {
    MARKER_RE.replace_all(reply, "").trim().to_string()
}

fn structured_ids(reply: &str, candidates: &[CatalogItem]) -> Option<Vec<CatalogItem>> {
    let caps = MARKER_RE.captures_iter(reply).last()?;
    let by_id: HashMap<&str, &CatalogItem> =
        candidates.iter().map(|item| (item.id.as_str(), item)).collect();

    let mut seen = HashSet::new();
    let items = caps[1]
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|raw| raw.trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '“' | '”')))
        .filter(|id| !id.is_empty())
        .filter_map(|id| by_id.get(id).copied())
        .filter(|item| seen.insert(item.id.clone()))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    Some(items)
}

fn clean_title(raw: &str) -> String {
    let unmarked: String = raw.chars().filter(|c| !matches!(c, '*' | '_' | '#')).collect();
    let cut = TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| unmarked.find(sep))
        .min()
        .unwrap_or(unmarked.len());
    normalize_text(&unmarked[..cut])
}

fn numbered_titles(reply: &str, candidates: &[CatalogItem]) -> Option<Vec<CatalogItem>> {
    let names: Vec<(String, &CatalogItem)> = candidates
        .iter()
        .map(|item| (normalize_text(&item.name), item))
        .collect();

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for line in reply.lines() {
        let Some(caps) = NUMBERED_LINE_RE.captures(line) else {
            continue;
        };
        let title = clean_title(&caps[1]);
        if title.chars().count() < MIN_TITLE_LEN {
            continue;
        }

        let matched = names
            .iter()
            .find(|(name, _)| *name == title)
            .or_else(|| names.iter().find(|(name, _)| name.starts_with(&title)));

        if let Some((_, item)) = matched
            && seen.insert(item.id.clone())
        {
            items.push((*item).clone());
            if items.len() == MAX_RECOMMENDATIONS {
                break;
            }
        }
    }

    Some(items)
}

fn name_substring(reply: &str, candidates: &[CatalogItem]) -> Option<Vec<CatalogItem>> {
    let mut remaining = normalize_text(reply);

    let mut by_length: Vec<(String, &str)> = candidates
        .iter()
        .map(|item| (normalize_text(&item.name), item.id.as_str()))
        .filter(|(name, _)| name.chars().count() >= MIN_TITLE_LEN)
        .collect();
    by_length.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    // Longest names first; a matched span is masked so shorter names
    // cannot match inside it.
    let mut matched: HashSet<&str> = HashSet::new();
    for (name, id) in &by_length {
        if remaining.contains(name.as_str()) {
            matched.insert(*id);
            remaining = remaining.replace(name.as_str(), "|");
        }
    }

    let items = candidates
        .iter()
        .filter(|item| matched.contains(item.id.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    Some(items)
}

fn category_fallback(_reply: &str, candidates: &[CatalogItem]) -> Option<Vec<CatalogItem>> {
    let mut used = HashSet::new();
    let mut items: Vec<CatalogItem> = Vec::new();

    for color in WineColor::FALLBACK_ORDER {
        if let Some(item) = candidates
            .iter()
            .find(|item| WineColor::from_display_name(&item.name) == Some(color))
            && used.insert(item.id.clone())
        {
            items.push(item.clone());
        }
    }

    for item in candidates {
        if items.len() >= CATEGORY_FALLBACK_COUNT {
            break;
        }
        if used.insert(item.id.clone()) {
            items.push(item.clone());
        }
    }

    Some(items)
}
