use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use business::domain::catalog::model::CatalogItem;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Language;

use super::entity::CatalogItemEntity;

#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("catalog.unreadable: {}", .0.display())]
    Unreadable(PathBuf),
    #[error("catalog.invalid_json: {}", .0.display())]
    InvalidJson(PathBuf),
    #[error("catalog.duplicate_id: {language} {id}")]
    DuplicateId { language: Language, id: String },
}

/// Read-only catalogs loaded once from `{data_dir}/{lang}.json`.
pub struct CatalogRepositoryJson {
    catalogs: HashMap<Language, Vec<CatalogItem>>,
}

impl CatalogRepositoryJson {
    /// Loads every supported language. A missing or invalid dataset fails
    /// the whole load.
    pub async fn load(data_dir: &Path) -> Result<Self, CatalogLoadError> {
        let mut catalogs = HashMap::new();
        for language in Language::ALL {
            let path = data_dir.join(format!("{}.json", language));
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|_| CatalogLoadError::Unreadable(path.clone()))?;
            let items = parse_dataset(language, &raw)
                .map_err(|e| match e {
                    ParseFailure::Json => CatalogLoadError::InvalidJson(path.clone()),
                    ParseFailure::Duplicate(id) => CatalogLoadError::DuplicateId { language, id },
                })?;

            tracing::info!("Loaded {} catalog items for {}", items.len(), language);
            catalogs.insert(language, items);
        }
        Ok(Self { catalogs })
    }

    pub fn from_items(catalogs: HashMap<Language, Vec<CatalogItem>>) -> Self {
        Self { catalogs }
    }
}

enum ParseFailure {
    Json,
    Duplicate(String),
}

fn parse_dataset(language: Language, raw: &str) -> Result<Vec<CatalogItem>, ParseFailure> {
    let entities: Vec<CatalogItemEntity> =
        serde_json::from_str(raw).map_err(|_| ParseFailure::Json)?;

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.id.clone()) {
            tracing::error!("Duplicate catalog id {} in {} dataset", entity.id, language);
            return Err(ParseFailure::Duplicate(entity.id));
        }
        items.push(entity.into_domain());
    }
    Ok(items)
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryJson {
    async fn get_all(&self, language: Language) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.catalogs
            .get(&language)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"id": "1", "name": "Chablis", "price": "19,90 €", "color": "white"},
        {"id": "2", "name": "Barolo", "price": "39,00 €", "color": "red"}
    ]"#;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn should_load_every_language() {
        let dir = temp_dir("ok");
        for language in Language::ALL {
            std::fs::write(dir.join(format!("{}.json", language)), DATASET).unwrap();
        }

        let repository = CatalogRepositoryJson::load(&dir).await.unwrap();

        let items = repository.get_all(Language::Nl).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Barolo");
    }

    #[tokio::test]
    async fn should_fail_when_dataset_missing() {
        let dir = temp_dir("missing");
        std::fs::write(dir.join("en.json"), DATASET).unwrap();
        let _ = std::fs::remove_file(dir.join("fr.json"));

        let result = CatalogRepositoryJson::load(&dir).await;

        assert!(matches!(result, Err(CatalogLoadError::Unreadable(_))));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let raw = r#"[
            {"id": "7", "name": "A", "price": "1 €"},
            {"id": "7", "name": "B", "price": "2 €"}
        ]"#;

        let result = parse_dataset(Language::En, raw);

        assert!(matches!(result, Err(ParseFailure::Duplicate(id)) if id == "7"));
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(matches!(
            parse_dataset(Language::Fr, "{not json"),
            Err(ParseFailure::Json)
        ));
    }

    #[tokio::test]
    async fn should_report_missing_language_as_not_found() {
        let repository = CatalogRepositoryJson::from_items(HashMap::new());

        let result = repository.get_all(Language::En).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
