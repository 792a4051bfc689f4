//! Naive flashcard and quiz generation.
//!
//! "Generation" is deliberately simple: the input text is split on
//! sentence-ending punctuation, short fragments are discarded, and a fixed
//! number of the remaining fragments become cards or quiz items built from
//! string templates. There is no NLP here, and every generated quiz marks
//! option 0 as correct. That triviality is part of the documented contract
//! and must not be "improved" without changing it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{GeneratedFlashcard, GeneratedQuiz};

/// Sentence boundary pattern. Runs of `.`, `!` and `?` end a sentence.
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence split pattern is valid"));

/// Fragments with this many characters or fewer (after trimming) are
/// discarded. A 10-char fragment is excluded; an 11-char one is kept.
const MIN_FRAGMENT_CHARS: usize = 10;

/// At most this many flashcards are generated per request.
pub const MAX_FLASHCARDS: usize = 10;

/// At most this many quiz items are generated per request.
pub const MAX_QUIZ_ITEMS: usize = 5;

/// Character count of the sentence preview embedded in a flashcard question.
const FLASHCARD_PREVIEW_CHARS: usize = 50;

/// Character count of the sentence preview embedded in a quiz question.
const QUIZ_PREVIEW_CHARS: usize = 60;

/// Difficulty tag applied when the request omits one.
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// The three fixed distractors appended after the correct option.
pub const QUIZ_DISTRACTORS: [&str; 3] = [
    "Opposite of the statement",
    "A different concept",
    "None of the above",
];

/// Resolve an optional difficulty tag to the effective one. The tag is
/// uninterpreted; anything the client sends is kept verbatim.
pub fn difficulty_or_default(difficulty: Option<String>) -> String {
    match difficulty {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DIFFICULTY.to_string(),
    }
}

/// Split text into trimmed sentence fragments longer than the minimum.
pub fn split_sentences(notes: &str) -> Vec<&str> {
    SENTENCE_SPLIT
        .split(notes)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_FRAGMENT_CHARS)
        .collect()
}

/// First `n` characters of a fragment, for question templates.
fn preview(fragment: &str, n: usize) -> String {
    fragment.chars().take(n).collect()
}

/// Generate up to [`MAX_FLASHCARDS`] cards from the notes text.
pub fn flashcards(notes: &str, difficulty: &str) -> Vec<GeneratedFlashcard> {
    split_sentences(notes)
        .into_iter()
        .take(MAX_FLASHCARDS)
        .map(|sentence| GeneratedFlashcard {
            question: format!(
                "What do you know about: \"{}...\"?",
                preview(sentence, FLASHCARD_PREVIEW_CHARS)
            ),
            answer: sentence.to_string(),
            difficulty: difficulty.to_string(),
        })
        .collect()
}

/// Generate up to [`MAX_QUIZ_ITEMS`] quiz items from the notes text.
///
/// Option 0 is the source sentence and is always the correct answer.
pub fn quiz(notes: &str, difficulty: &str) -> Vec<GeneratedQuiz> {
    split_sentences(notes)
        .into_iter()
        .take(MAX_QUIZ_ITEMS)
        .map(|sentence| {
            let mut options = Vec::with_capacity(4);
            options.push(sentence.to_string());
            options.extend(QUIZ_DISTRACTORS.iter().map(|d| d.to_string()));

            GeneratedQuiz {
                question: format!(
                    "Based on your notes, what is the main idea of: \"{}...\"?",
                    preview(sentence, QUIZ_PREVIEW_CHARS)
                ),
                options,
                correct_answer: 0,
                difficulty: difficulty.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "The mitochondria is the powerhouse of the cell. \
        Photosynthesis converts light energy into chemical energy! \
        Osmosis moves water across membranes? DNA stores genetic information. \
        Short one. Enzymes catalyze biochemical reactions.";

    #[test]
    fn test_split_discards_short_fragments() {
        // "Short one" is 9 chars and must be dropped.
        let sentences = split_sentences(NOTES);
        assert!(!sentences.iter().any(|s| *s == "Short one"));
        assert_eq!(sentences.len(), 5);
    }

    #[test]
    fn test_length_boundary() {
        // Exactly 10 chars: excluded. Exactly 11: included.
        assert!(split_sentences("abcdefghij.").is_empty());
        assert_eq!(split_sentences("abcdefghijk."), vec!["abcdefghijk"]);
    }

    #[test]
    fn test_boundary_counts_chars_not_bytes() {
        // 11 multi-byte chars qualify even though a byte count would differ.
        let s = "ααααααααααα.";
        assert_eq!(split_sentences(s).len(), 1);
    }

    #[test]
    fn test_flashcard_template() {
        let cards = flashcards("The mitochondria is the powerhouse of the cell.", "easy");
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].question,
            "What do you know about: \"The mitochondria is the powerhouse of the cell...\"?"
        );
        assert_eq!(
            cards[0].answer,
            "The mitochondria is the powerhouse of the cell"
        );
        assert_eq!(cards[0].difficulty, "easy");
    }

    #[test]
    fn test_flashcard_preview_truncated_at_50() {
        let long = format!("{}.", "x".repeat(80));
        let cards = flashcards(&long, DEFAULT_DIFFICULTY);
        let preview: String = "x".repeat(50);
        assert_eq!(
            cards[0].question,
            format!("What do you know about: \"{}...\"?", preview)
        );
    }

    #[test]
    fn test_flashcards_capped_at_ten() {
        let many = (0..25)
            .map(|i| format!("This is sentence number {:02}.", i))
            .collect::<String>();
        assert_eq!(flashcards(&many, DEFAULT_DIFFICULTY).len(), MAX_FLASHCARDS);
    }

    #[test]
    fn test_quiz_capped_at_five_with_fixed_options() {
        let many = (0..12)
            .map(|i| format!("This is sentence number {:02}.", i))
            .collect::<String>();
        let quizzes = quiz(&many, "hard");
        assert_eq!(quizzes.len(), MAX_QUIZ_ITEMS);

        for q in &quizzes {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.correct_answer, 0);
            assert_eq!(q.options[1], "Opposite of the statement");
            assert_eq!(q.options[2], "A different concept");
            assert_eq!(q.options[3], "None of the above");
            assert_eq!(q.difficulty, "hard");
        }
    }

    #[test]
    fn test_quiz_option_zero_is_sentence() {
        let quizzes = quiz("Osmosis moves water across membranes?", DEFAULT_DIFFICULTY);
        assert_eq!(quizzes[0].options[0], "Osmosis moves water across membranes");
        assert_eq!(
            quizzes[0].question,
            "Based on your notes, what is the main idea of: \"Osmosis moves water across membranes...\"?"
        );
    }

    #[test]
    fn test_no_qualifying_sentences_yields_empty() {
        assert!(flashcards("Hi. Ok! No?", DEFAULT_DIFFICULTY).is_empty());
        assert!(quiz("Hi. Ok! No?", DEFAULT_DIFFICULTY).is_empty());
    }

    #[test]
    fn test_difficulty_default() {
        assert_eq!(difficulty_or_default(None), "medium");
        assert_eq!(difficulty_or_default(Some(String::new())), "medium");
        assert_eq!(difficulty_or_default(Some("hard".to_string())), "hard");
    }
}
