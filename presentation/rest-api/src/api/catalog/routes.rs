use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::repository::CatalogRepository;

use crate::api::catalog::dto::CatalogItemDto;
use crate::api::error::ErrorResponse;
use crate::api::language::parse_language;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogApi {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }
}

/// Catalog API
#[OpenApi]
impl CatalogApi {
    /// List the catalog
    ///
    /// Returns every wine of the requested language, in dataset order.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(
        &self,
        /// en, fr or nl (default: en)
        lang: Query<Option<String>>,
    ) -> GetCatalogResponse {
        let language = match parse_language(lang.0.as_deref()) {
            Ok(language) => language,
            Err(json) => return GetCatalogResponse::BadRequest(json),
        };

        match self.repository.get_all(language).await {
            Ok(items) => GetCatalogResponse::Ok(Json(
                items.into_iter().map(CatalogItemDto::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Catalog for {} unavailable: {}", language, err);
                GetCatalogResponse::InternalError(Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "recommendation.catalog_unavailable".to_string(),
                }))
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CatalogItemDto>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
