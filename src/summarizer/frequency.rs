// ============================================================
// Layer 5 — Frequency Table
// ============================================================
// Counts how often each content word occurs in the text.
//
// A token is counted when, after lowercasing, it is
//   - non-empty and made only of alphabetic characters
//     ("dogs" yes, "u.s." no, "2020" no, "well-known" no)
//   - not a stopword
//
// The table is the only "model" the summarizer has: a sentence
// is important when it contains frequent words.

use std::collections::HashMap;

use crate::nlp::stopwords::StopwordFilter;

/// Lowercase content word → number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Build the table from already-tokenised words
    pub fn build<I, S>(tokens: I, stopwords: &StopwordFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in tokens {
            let word = token.as_ref().to_lowercase();
            if is_alphabetic_word(&word) && !stopwords.is_stopword(&word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Occurrences of `word` (expects lowercase)
    #[cfg(test)]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Iterate over (word, count) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// The `n` most frequent words, ties broken alphabetically
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::words::tokenize;

    #[test]
    fn test_counts_content_words_case_insensitively() {
        let text = "Dogs are great. Cats are great too. Dogs and cats are pets.";
        let table = FrequencyTable::build(tokenize(text), &StopwordFilter::default());

        assert_eq!(table.get("dogs"), 2);
        assert_eq!(table.get("great"), 2);
        assert_eq!(table.get("cats"), 2);
        assert_eq!(table.get("pets"), 1);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("are"), 0);
    }

    #[test]
    fn test_skips_non_alphabetic_tokens() {
        let tokens = ["2020", "U.S.", "well-known", ",", "café", ""];
        let table = FrequencyTable::build(tokens, &StopwordFilter::empty());

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("café"), 1);
    }

    #[test]
    fn test_top_orders_by_count_then_word() {
        let tokens = ["b", "a", "c", "c", "a"];
        let table = FrequencyTable::build(tokens, &StopwordFilter::empty());
        assert_eq!(table.top(2), vec![("a", 2), ("c", 2)]);
    }
}
