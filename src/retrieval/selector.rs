use crate::corpus::Section;
use crate::retrieval::ranker::ScoredChunk;

/// Resolve the best-ranked chunks to their parent sections and pick the
/// context passages to forward to generation.
///
/// The candidate pool (`top_k`) is wider than the final budget
/// (`max_passages`) because several top chunks often collapse into the same
/// section; deduplicating a wider pool avoids under-filling the context.
///
/// A chunk whose section id resolves to nothing is skipped and does not
/// consume any budget. Output preserves rank order.
pub fn select_context(
    ranked: &[ScoredChunk],
    sections: &[Section],
    top_k: usize,
    max_passages: usize,
) -> Vec<String> {
    let mut passages: Vec<String> = Vec::new();

    for scored in ranked.iter().take(top_k) {
        let Some(section) = sections.iter().find(|s| s.id == scored.section_id) else {
            tracing::debug!("No section found for chunk (section id {})", scored.section_id);
            continue;
        };

        if !passages.iter().any(|p| p == &section.content) {
            passages.push(section.content.clone());
        }
    }

    passages.truncate(max_passages);
    passages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(content: &str, section_id: &str, score: f64) -> ScoredChunk {
        ScoredChunk {
            content: content.to_string(),
            section_id: section_id.to_string(),
            score,
        }
    }

    fn section(id: &str, content: &str) -> Section {
        Section {
            id: id.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn chunks_sharing_a_section_yield_one_passage() {
        let ranked = vec![scored("a", "combat", 0.9), scored("b", "combat", 0.8)];
        let sections = vec![section("combat", "Combat. Roll dice to attack.")];

        let passages = select_context(&ranked, &sections, 10, 3);
        assert_eq!(passages, vec!["Combat. Roll dice to attack."]);
    }

    #[test]
    fn never_returns_more_than_max_passages() {
        let ranked = vec![
            scored("a", "s1", 0.9),
            scored("b", "s2", 0.8),
            scored("c", "s3", 0.7),
            scored("d", "s4", 0.6),
        ];
        let sections = vec![
            section("s1", "one"),
            section("s2", "two"),
            section("s3", "three"),
            section("s4", "four"),
        ];

        let passages = select_context(&ranked, &sections, 10, 3);
        assert_eq!(passages, vec!["one", "two", "three"]);
    }

    #[test]
    fn passages_follow_rank_order() {
        let ranked = vec![
            scored("low", "s3", 0.2),
            scored("high", "s1", 0.9),
            scored("mid", "s2", 0.5),
        ];
        let sections = vec![
            section("s1", "first"),
            section("s2", "second"),
            section("s3", "third"),
        ];

        // selector trusts the caller's ordering
        let passages = select_context(&ranked, &sections, 10, 3);
        assert_eq!(passages, vec!["third", "first", "second"]);
    }

    #[test]
    fn unresolvable_section_is_skipped_without_consuming_budget() {
        let ranked = vec![
            scored("a", "missing", 0.9),
            scored("b", "s1", 0.8),
            scored("c", "s2", 0.7),
            scored("d", "s3", 0.6),
        ];
        let sections = vec![
            section("s1", "one"),
            section("s2", "two"),
            section("s3", "three"),
        ];

        let passages = select_context(&ranked, &sections, 10, 3);
        assert_eq!(passages, vec!["one", "two", "three"]);
    }

    #[test]
    fn top_k_bounds_the_candidate_pool() {
        let ranked = vec![
            scored("a", "s1", 0.9),
            scored("b", "s2", 0.8),
            scored("c", "s3", 0.7),
        ];
        let sections = vec![
            section("s1", "one"),
            section("s2", "two"),
            section("s3", "three"),
        ];

        let passages = select_context(&ranked, &sections, 2, 3);
        assert_eq!(passages, vec!["one", "two"]);
    }

    #[test]
    fn low_scores_still_select_passages() {
        let ranked = vec![scored("a", "s1", -4.2), scored("b", "s2", -7.9)];
        let sections = vec![section("s1", "one"), section("s2", "two")];

        let passages = select_context(&ranked, &sections, 10, 3);
        assert_eq!(passages, vec!["one", "two"]);
    }

    #[test]
    fn empty_ranking_selects_nothing() {
        let sections = vec![section("s1", "one")];
        let passages = select_context(&[], &sections, 10, 3);
        assert!(passages.is_empty());
    }
}
