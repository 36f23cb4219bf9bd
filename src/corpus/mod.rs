//! Static rulebook corpus.
//!
//! Two read-only collections back every request:
//! - chunk records: pre-embedded sub-passages used for similarity ranking
//! - section records: the full passages ultimately shown as context
//!
//! Both are loaded once at startup and never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A pre-embedded sub-passage of the rulebook.
///
/// Embedding vectors share one fixed dimensionality across the corpus and
/// with query embeddings; the loader does not enforce this, the scorer does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub section_id: String,
    pub embedding: Vec<f32>,
}

/// A named passage of the rulebook. One section may own several chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub content: String,
}

#[derive(Debug)]
pub struct Corpus {
    chunks: Vec<Chunk>,
    sections: Vec<Section>,
}

impl Corpus {
    pub fn new(chunks: Vec<Chunk>, sections: Vec<Section>) -> Self {
        Self { chunks, sections }
    }

    /// Load both corpus files from disk.
    pub fn load(index_path: &Path, sections_path: &Path) -> Result<Self, ApiError> {
        let chunks: Vec<Chunk> = load_json_file(index_path)?;
        let sections: Vec<Section> = load_json_file(sections_path)?;

        tracing::info!(
            "Loaded corpus: {} chunks, {} sections",
            chunks.len(),
            sections.len()
        );

        Ok(Self::new(chunks, sections))
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        ApiError::CorpusLoad(format!("failed to read {}: {}", path.display(), err))
    })?;

    serde_json::from_str(&contents).map_err(|err| {
        ApiError::CorpusLoad(format!("failed to parse {}: {}", path.display(), err))
    })
}
