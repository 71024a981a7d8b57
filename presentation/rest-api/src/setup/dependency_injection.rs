use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryKv;
use persistence::catalog::repository::CatalogRepositoryJson;
use persistence::chat::repository::ChatSessionRepositoryInMemory;
use persistence::kv::store::KeyValueStore;
use persistence::suggestion::repository::SuggestionRepositoryKv;

use openai::completion::CompletionServiceOpenAI;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;
use business::application::chat::send_message::SendChatMessageUseCaseImpl;
use business::application::chat::show_more::ShowMoreUseCaseImpl;
use business::application::chat::start_session::StartChatSessionUseCaseImpl;
use business::application::recommendation::recommend::RecommendUseCaseImpl;
use business::application::recommendation::warm_cache::WarmCacheUseCaseImpl;
use business::application::suggestion::generate::GenerateSuggestionsUseCaseImpl;
use business::application::suggestion::record::RecordQueryUseCaseImpl;
use business::domain::cart::events::CartNotifier;
use business::domain::recommendation::cache::RecommendationCache;
use business::domain::recommendation::use_cases::warm_cache::WarmCacheUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
    pub chat_api: crate::api::chat::routes::ChatApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
    pub warm_cache_use_case: Arc<dyn WarmCacheUseCase>,
    pub cart_notifier: CartNotifier,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(config.openai.ai_enabled());

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryJson::load(&config.catalog.data_dir).await?);
        let chat_repository = Arc::new(ChatSessionRepositoryInMemory::new());
        let cart_repository = Arc::new(CartRepositoryKv::new(store.clone()));
        let suggestion_repository = Arc::new(SuggestionRepositoryKv::new(store));
        let completion = Arc::new(CompletionServiceOpenAI::new(
            config.openai.client(),
            config.openai.model.clone(),
        ));

        let cache = Arc::new(RecommendationCache::new());
        let cart_notifier = CartNotifier::new();
        let chat_lock = Arc::new(Mutex::new(()));

        // Recommendation use cases
        let recommend_use_case = Arc::new(RecommendUseCaseImpl {
            catalog_repository: catalog_repository.clone(),
            completion,
            cache: cache.clone(),
            prompt_options: config.recommendation.prompt.clone(),
            max_tokens: config.openai.max_tokens,
            logger: logger.clone(),
        });
        let warm_cache_use_case = Arc::new(WarmCacheUseCaseImpl {
            recommend: recommend_use_case.clone(),
            cache,
            logger: logger.clone(),
        });

        // Suggestion use cases
        let record_query_use_case = Arc::new(RecordQueryUseCaseImpl {
            repository: suggestion_repository.clone(),
            logger: logger.clone(),
        });
        let generate_suggestions_use_case = Arc::new(GenerateSuggestionsUseCaseImpl {
            repository: suggestion_repository,
            logger: logger.clone(),
        });

        // Chat use cases
        let start_session_use_case = Arc::new(StartChatSessionUseCaseImpl {
            repository: chat_repository.clone(),
            logger: logger.clone(),
        });
        let send_message_use_case = Arc::new(SendChatMessageUseCaseImpl {
            sessions: chat_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            recommend: recommend_use_case.clone(),
            record_query: record_query_use_case.clone(),
            lock: chat_lock.clone(),
            logger: logger.clone(),
        });
        let show_more_use_case = Arc::new(ShowMoreUseCaseImpl {
            repository: chat_repository,
            lock: chat_lock,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            notifier: cart_notifier.clone(),
            logger: logger.clone(),
        });
        let update_cart_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            notifier: cart_notifier.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            notifier: cart_notifier.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            notifier: cart_notifier.clone(),
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(catalog_repository);

        let recommendation_api = crate::api::recommendation::routes::RecommendationApi::new(
            recommend_use_case,
            record_query_use_case,
        );

        let chat_api = crate::api::chat::routes::ChatApi::new(
            start_session_use_case,
            send_message_use_case,
            show_more_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            update_cart_item_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(generate_suggestions_use_case);

        Ok(Self {
            health_api,
            catalog_api,
            recommendation_api,
            chat_api,
            cart_api,
            suggestion_api,
            warm_cache_use_case,
            cart_notifier,
        })
    }
}
