use std::cmp::Ordering;

use serde::Serialize;

use crate::core::errors::ApiError;
use crate::corpus::Chunk;
use crate::retrieval::scorer::dot_product;

/// A chunk with its computed relevance score. Transient, per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredChunk {
    pub content: String,
    pub section_id: String,
    pub score: f64,
}

/// Score every chunk against the query embedding, best first.
///
/// Full linear scan of the corpus. The sort is stable, so chunks with equal
/// scores keep their corpus order; dot-product ties are common enough that
/// this matters for reproducible selection.
pub fn rank(query: &[f32], chunks: &[Chunk]) -> Result<Vec<ScoredChunk>, ApiError> {
    let mut scored = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let score = dot_product(query, &chunk.embedding)?;
        scored.push(ScoredChunk {
            content: chunk.content.clone(),
            section_id: chunk.section_id.clone(),
            score,
        });
    }

    scored.sort_by(|left, right| right.score.partial_cmp(&left.score).unwrap_or(Ordering::Equal));
    Ok(scored)
}
