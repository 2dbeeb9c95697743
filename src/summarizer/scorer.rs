// ============================================================
// Layer 5 — Sentence Scorer
// ============================================================
// Gives every sentence a score: the sum of the frequencies of
// the table words it contains.
//
// Two ways to decide "contains":
//
//   Substring (default) — the word occurs anywhere in the
//                         lowercased sentence, even inside a longer
//                         word. With "cat" in the table, a sentence
//                         mentioning only "category" still earns
//                         cat's count.
//   Token               — the word is one of the sentence's tokens.
//
// Scores are keyed by sentence text. If the same sentence text
// appears twice in the document both occurrences add into one
// entry, which keeps the position of the first occurrence.
// A sentence that matches nothing gets no entry at all.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::summary::ScoredSentence;
use crate::nlp::words::tokenize_sentence;
use crate::summarizer::frequency::FrequencyTable;

/// How a table word is matched against a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Substring,
    Token,
}

/// Score sentences in document order.
/// Returns one entry per distinct matching sentence, in order of
/// first appearance.
pub fn score_sentences(
    sentences: &[&str],
    table: &FrequencyTable,
    mode: MatchMode,
) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sentence in sentences {
        let score = match mode {
            MatchMode::Substring => substring_score(sentence, table),
            MatchMode::Token => token_score(sentence, table),
        };
        if score == 0 {
            continue;
        }

        match index.get(sentence) {
            Some(&slot) => scored[slot].score += score,
            None => {
                index.insert(*sentence, scored.len());
                scored.push(ScoredSentence::new(*sentence, score));
            }
        }
    }

    scored
}

fn substring_score(sentence: &str, table: &FrequencyTable) -> usize {
    let lowered = sentence.to_lowercase();
    table
        .iter()
        .filter(|(word, _)| lowered.contains(word))
        .map(|(_, count)| count)
        .sum()
}

fn token_score(sentence: &str, table: &FrequencyTable) -> usize {
    let words: HashSet<String> = tokenize_sentence(sentence)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();
    table
        .iter()
        .filter(|(word, _)| words.contains(*word))
        .map(|(_, count)| count)
        .sum()
}
