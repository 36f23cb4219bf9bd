//! Retrieval-and-ranking pipeline.
//!
//! Pure pieces first (scorer, ranker, selector, prompt assembly), then the
//! engine that wires them to the embedding and generation provider.

pub mod engine;
pub mod prompt;
pub mod ranker;
pub mod scorer;
pub mod selector;

pub use engine::{AnswerOutcome, DebugTrace, RetrievalEngine};
pub use ranker::{rank, ScoredChunk};
pub use scorer::dot_product;
pub use selector::select_context;
