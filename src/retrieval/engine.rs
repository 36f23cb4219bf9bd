//! Retrieval orchestrator.
//!
//! Drives one question through the full pipeline: embed the question, rank
//! the corpus, select context passages, assemble the prompt, and request a
//! completion. Provider failures short-circuit with their own error
//! categories; nothing is retried here.

use std::sync::Arc;

use serde::Serialize;

use crate::core::config::settings::{ModelSettings, RetrievalSettings};
use crate::core::errors::ApiError;
use crate::corpus::Corpus;
use crate::llm::provider::LlmProvider;
use crate::llm::types::{ChatMessage, ChatRequest};
use crate::retrieval::prompt::{assemble_prompt, SYSTEM_INSTRUCTION};
use crate::retrieval::ranker::{rank, ScoredChunk};
use crate::retrieval::selector::select_context;

/// How many scored chunks the debug trace reports, independent of the
/// selection pool size.
const REPORTED_SCORES: usize = 10;

/// Everything a request needs to observe what retrieval did.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugTrace {
    pub user_message: String,
    pub scores: Vec<ScoredChunk>,
    pub relevant_sections: Vec<String>,
    pub prompt: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    #[serde(rename = "assistantResponse")]
    pub assistant_response: String,
    #[serde(rename = "debugData")]
    pub debug: DebugTrace,
}

#[derive(Clone)]
pub struct RetrievalEngine {
    corpus: Arc<Corpus>,
    provider: Arc<dyn LlmProvider>,
    models: ModelSettings,
    retrieval: RetrievalSettings,
}

impl RetrievalEngine {
    pub fn new(
        corpus: Arc<Corpus>,
        provider: Arc<dyn LlmProvider>,
        models: ModelSettings,
        retrieval: RetrievalSettings,
    ) -> Self {
        Self {
            corpus,
            provider,
            models,
            retrieval,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<AnswerOutcome, ApiError> {
        let embedding = self.embed_question(question).await?;

        let ranked = rank(&embedding, self.corpus.chunks())?;
        let passages = select_context(
            &ranked,
            self.corpus.sections(),
            self.retrieval.top_k,
            self.retrieval.max_passages,
        );
        let prompt = assemble_prompt(&passages, question);

        let model = self
            .models
            .chat_model
            .clone()
            .ok_or_else(|| ApiError::Configuration("chat model not specified".to_string()))?;

        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(prompt.clone()),
        ]);
        let assistant_response = self.provider.chat(request, &model).await?;

        let mut scores = ranked;
        scores.truncate(REPORTED_SCORES);

        Ok(AnswerOutcome {
            assistant_response,
            debug: DebugTrace {
                user_message: question.to_string(),
                scores,
                relevant_sections: passages,
                prompt,
                model,
            },
        })
    }

    async fn embed_question(&self, question: &str) -> Result<Vec<f32>, ApiError> {
        let vectors = self
            .provider
            .embed(&[question.to_string()], &self.models.embedding_model)
            .await?;

        vectors.into_iter().next().ok_or_else(|| {
            ApiError::EmbeddingProvider("provider returned no embedding".to_string())
        })
    }
}
