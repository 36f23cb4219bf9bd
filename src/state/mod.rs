use std::sync::Arc;

use crate::core::config::settings::{
    CorpusSettings, ModelSettings, ProviderSettings, RetrievalSettings,
};
use crate::core::config::{AppPaths, ConfigService};
use crate::corpus::Corpus;
use crate::llm::{LlmProvider, OpenAiProvider};
use crate::retrieval::RetrievalEngine;

pub mod error;

use error::InitializationError;

/// Global application state shared across all routes.
///
/// Everything here is read-only after startup: the corpus never changes
/// during the process lifetime, and the provider and engine hold no mutable
/// state of their own.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub config: ConfigService,
    pub corpus: Arc<Corpus>,
    pub provider: Arc<dyn LlmProvider>,
    pub engine: RetrievalEngine,
}

impl AppState {
    /// Initializes the application state.
    ///
    /// Loads configuration, reads both corpus files, and builds the provider
    /// client and retrieval engine. A missing chat model is tolerated here
    /// and reported per request instead.
    pub fn initialize() -> Result<Arc<Self>, InitializationError> {
        let paths = Arc::new(AppPaths::new());
        let config = ConfigService::new(paths.clone());
        let config_value = config
            .load_config()
            .map_err(InitializationError::Config)?;

        let provider_settings = ProviderSettings::from_config(&config_value);
        let model_settings = ModelSettings::from_config(&config_value);
        let retrieval_settings = RetrievalSettings::from_config(&config_value);
        let corpus_settings = CorpusSettings::from_config(&config_value, &paths);

        if model_settings.chat_model.is_none() {
            tracing::warn!(
                "No chat model configured; /api/ask will report a configuration error"
            );
        }

        let corpus = Arc::new(
            Corpus::load(&corpus_settings.index_path, &corpus_settings.sections_path)
                .map_err(InitializationError::Corpus)?,
        );

        let provider: Arc<dyn LlmProvider> = Arc::new(
            OpenAiProvider::new(&provider_settings).map_err(InitializationError::Provider)?,
        );

        let engine = RetrievalEngine::new(
            corpus.clone(),
            provider.clone(),
            model_settings,
            retrieval_settings,
        );

        Ok(Arc::new(Self {
            paths,
            config,
            corpus,
            provider,
            engine,
        }))
    }
}
