//! Prompt templates for the generation call.
//!
//! The wording of both constants is part of the behavioral contract; changes
//! here change what the assistant says, so keep edits deliberate and
//! reviewed.

/// Separator placed between context passages.
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Instruction template for the user-role message. The directives matter:
/// ground the answer in the context, weigh section applicability before
/// answering, keep headings and reasoning steps out of the visible answer,
/// and admit when no answer exists rather than inventing one.
pub const ANSWER_PROMPT_TEMPLATE: &str = "Answer the following question given the provided context. First look at the heading of the relevant section from the context and assess whether it applies to the situation of the question, then reason through the logic of the rules before giving an answer. Your answer should be as accurate as possible, and should not include the details of the headings and sections, nor your steps of reasoning. If the answer cannot be found in the context, respond that you could not find the answer, without mentioning the context.\n\nContext:\n\n<<CONTEXT>>\n\n=== end of context ===\n\nQuestion: <<QUESTION>>";

/// System persona for the generation call. The model treats the supplied
/// excerpts as its own knowledge and never refers to them as provided
/// material.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert on the board game 'Nemesis', and your job is to provide answers and information on the rules of the game using excerpts from the rulebook which will be provided for you, but which you should treat as your own implicit knowledge and not speak to the user about.";

const CONTEXT_PLACEHOLDER: &str = "<<CONTEXT>>";
const QUESTION_PLACEHOLDER: &str = "<<QUESTION>>";

/// Substitute the selected passages and the raw question into the template.
pub fn assemble_prompt(passages: &[String], question: &str) -> String {
    ANSWER_PROMPT_TEMPLATE
        .replace(CONTEXT_PLACEHOLDER, &passages.join(PASSAGE_SEPARATOR))
        .replace(QUESTION_PLACEHOLDER, question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_question_and_passages() {
        let passages = vec!["Fire spreads each round.".to_string()];
        let prompt = assemble_prompt(&passages, "How does fire spread?");

        assert!(prompt.contains("How does fire spread?"));
        assert!(prompt.contains("Fire spreads each round."));
    }

    #[test]
    fn passages_are_joined_with_the_separator() {
        let passages = vec!["first".to_string(), "second".to_string()];
        let prompt = assemble_prompt(&passages, "q");

        assert!(prompt.contains("first\n\n---\n\nsecond"));
    }

    #[test]
    fn no_placeholders_survive_assembly() {
        let prompt = assemble_prompt(&["p".to_string()], "q");
        assert!(!prompt.contains("<<CONTEXT>>"));
        assert!(!prompt.contains("<<QUESTION>>"));
    }

    #[test]
    fn empty_passages_yield_an_empty_context_block() {
        let prompt = assemble_prompt(&[], "q");
        assert!(prompt.contains("Context:\n\n\n\n=== end of context ==="));
    }
}
