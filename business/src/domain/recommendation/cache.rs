use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use crate::domain::shared::text::normalize_text;
use crate::domain::shared::value_objects::Language;

use super::model::RecommendationResult;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

type CacheKey = (Language, String);

#[derive(Default)]
struct Entries {
    results: HashMap<CacheKey, RecommendationResult>,
    /// Insertion order; the front is evicted first.
    order: VecDeque<CacheKey>,
}

/// Results for fresh queries, keyed by language and normalized query text.
///
/// Written by user turns and the warm-up task alike; last write wins. Holds at
/// most `capacity` entries, evicting the oldest insertion.
pub struct RecommendationCache {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for RecommendationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl RecommendationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, language: Language, query: &str) -> Option<RecommendationResult> {
        let key = (language, normalize_text(query));
        match self.entries.read() {
            Ok(entries) => entries.results.get(&key).cloned(),
            Err(poisoned) => poisoned.into_inner().results.get(&key).cloned(),
        }
    }

    pub fn put(&self, language: Language, query: &str, result: RecommendationResult) {
        let key = (language, normalize_text(query));
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(existing) = entries.results.get_mut(&key) {
            *existing = result;
            return;
        }
        while entries.results.len() >= self.capacity {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.results.remove(&oldest);
                }
                None => break,
            }
        }
        entries.order.push_back(key.clone());
        entries.results.insert(key, result);
    }

    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(entries) => entries.results.len(),
            Err(poisoned) => poisoned.into_inner().results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::model::ResponseMode;

    fn result(narrative: &str) -> RecommendationResult {
        RecommendationResult {
            narrative: narrative.to_string(),
            items: vec![],
            mode: ResponseMode::Ai,
        }
    }

    #[test]
    fn should_return_entry_for_equivalent_query_text() {
        let cache = RecommendationCache::new();
        cache.put(Language::En, "Wine for Fish", result("fish"));

        let hit = cache.get(Language::En, "  wine for fish! ");

        assert_eq!(hit.map(|r| r.narrative), Some("fish".to_string()));
    }

    #[test]
    fn should_separate_languages() {
        let cache = RecommendationCache::new();
        cache.put(Language::En, "champagne", result("en"));

        assert!(cache.get(Language::Fr, "champagne").is_none());
    }

    #[test]
    fn should_keep_last_write() {
        let cache = RecommendationCache::new();
        cache.put(Language::Nl, "rood", result("first"));
        cache.put(Language::Nl, "rood", result("second"));

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(Language::Nl, "rood").map(|r| r.narrative),
            Some("second".to_string())
        );
    }

    #[test]
    fn should_evict_oldest_entry_when_full() {
        let cache = RecommendationCache::with_capacity(2);
        cache.put(Language::En, "red", result("red"));
        cache.put(Language::En, "white", result("white"));
        cache.put(Language::En, "red", result("red again"));

        cache.put(Language::En, "rose", result("rose"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(Language::En, "red").is_none());
        assert!(cache.get(Language::En, "white").is_some());
        assert!(cache.get(Language::En, "rose").is_some());
    }

    #[test]
    fn should_stay_bounded_under_many_distinct_queries() {
        let cache = RecommendationCache::with_capacity(8);

        for i in 0..100 {
            cache.put(Language::Fr, &format!("query {}", i), result("x"));
        }

        assert_eq!(cache.len(), 8);
        assert!(cache.get(Language::Fr, "query 99").is_some());
        assert!(cache.get(Language::Fr, "query 91").is_none());
    }
}
