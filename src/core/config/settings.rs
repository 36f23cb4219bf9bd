//! Typed views over the loose YAML config, with defaults for every knob.

use std::env;
use std::path::PathBuf;

use serde_json::Value;

use super::paths::AppPaths;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TOP_K: usize = 10;
const DEFAULT_MAX_PASSAGES: usize = 3;

/// Connection settings for the OpenAI-compatible provider endpoint.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl ProviderSettings {
    pub fn from_config(config: &Value) -> Self {
        let provider = config.get("provider");
        let base_url = provider
            .and_then(|v| v.get("base_url"))
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        let timeout_secs = provider
            .and_then(|v| v.get("timeout_secs"))
            .and_then(|v| v.as_u64())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        Self {
            base_url,
            api_key,
            timeout_secs,
        }
    }
}

/// Model identifiers for the two provider calls.
///
/// A missing chat model is not fatal at startup; requests report a
/// configuration error instead.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub chat_model: Option<String>,
    pub embedding_model: String,
}

impl ModelSettings {
    pub fn from_config(config: &Value) -> Self {
        let models = config.get("models");
        let chat_model = models
            .and_then(|v| v.get("chat_model"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .or_else(|| env::var("OPENAI_MODEL").ok())
            .filter(|m| !m.is_empty());
        let embedding_model = models
            .and_then(|v| v.get("embedding_model"))
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_EMBEDDING_MODEL)
            .to_string();

        Self {
            chat_model,
            embedding_model,
        }
    }
}

/// Candidate pool and context budget for passage selection.
#[derive(Debug, Clone)]
pub struct RetrievalSettings {
    pub top_k: usize,
    pub max_passages: usize,
}

impl RetrievalSettings {
    pub fn from_config(config: &Value) -> Self {
        let retrieval = config.get("retrieval");
        let top_k = retrieval
            .and_then(|v| v.get("top_k"))
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_TOP_K);
        let max_passages = retrieval
            .and_then(|v| v.get("max_passages"))
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_MAX_PASSAGES);

        Self {
            top_k,
            max_passages,
        }
    }
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            max_passages: DEFAULT_MAX_PASSAGES,
        }
    }
}

/// Locations of the two static corpus files.
#[derive(Debug, Clone)]
pub struct CorpusSettings {
    pub index_path: PathBuf,
    pub sections_path: PathBuf,
}

impl CorpusSettings {
    pub fn from_config(config: &Value, paths: &AppPaths) -> Self {
        let corpus = config.get("corpus");
        let index_path = resolve_path(
            corpus.and_then(|v| v.get("index_path")).and_then(|v| v.as_str()),
            paths,
            "index.json",
        );
        let sections_path = resolve_path(
            corpus
                .and_then(|v| v.get("sections_path"))
                .and_then(|v| v.as_str()),
            paths,
            "sections.json",
        );

        Self {
            index_path,
            sections_path,
        }
    }
}

fn resolve_path(configured: Option<&str>, paths: &AppPaths, default_name: &str) -> PathBuf {
    match configured {
        Some(p) => {
            let p = PathBuf::from(p);
            if p.is_absolute() {
                p
            } else {
                paths.project_root.join(p)
            }
        }
        None => paths.data_dir.join(default_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn retrieval_settings_fall_back_to_defaults() {
        let settings = RetrievalSettings::from_config(&Value::Null);
        assert_eq!(settings.top_k, 10);
        assert_eq!(settings.max_passages, 3);
    }

    #[test]
    fn retrieval_settings_read_configured_budgets() {
        let config = json!({ "retrieval": { "top_k": 20, "max_passages": 5 } });
        let settings = RetrievalSettings::from_config(&config);
        assert_eq!(settings.top_k, 20);
        assert_eq!(settings.max_passages, 5);
    }

    #[test]
    fn provider_settings_read_base_url_and_timeout() {
        let config = json!({ "provider": { "base_url": "http://localhost:1234", "timeout_secs": 5 } });
        let settings = ProviderSettings::from_config(&config);
        assert_eq!(settings.base_url, "http://localhost:1234");
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn model_settings_default_embedding_model() {
        let settings = ModelSettings::from_config(&Value::Null);
        assert_eq!(settings.embedding_model, DEFAULT_EMBEDDING_MODEL);
    }

    #[test]
    fn corpus_paths_resolve_relative_to_project_root() {
        let paths = AppPaths {
            project_root: PathBuf::from("/srv/rulesage"),
            user_data_dir: PathBuf::from("/srv/rulesage"),
            log_dir: PathBuf::from("/srv/rulesage/logs"),
            data_dir: PathBuf::from("/srv/rulesage/data"),
        };

        let config = json!({ "corpus": { "index_path": "corpus/index.json" } });
        let settings = CorpusSettings::from_config(&config, &paths);
        assert_eq!(
            settings.index_path,
            PathBuf::from("/srv/rulesage/corpus/index.json")
        );
        assert_eq!(
            settings.sections_path,
            PathBuf::from("/srv/rulesage/data/sections.json")
        );
    }
}
