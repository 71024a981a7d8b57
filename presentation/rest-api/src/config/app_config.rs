use super::{
    catalog_config::CatalogConfig, cors_config, openai_config::OpenAIConfig,
    recommendation_config::RecommendationConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
    pub catalog: CatalogConfig,
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            openai: OpenAIConfig::from_env(),
            catalog: CatalogConfig::from_env(),
            recommendation: RecommendationConfig::from_env(),
        }
    }
}
