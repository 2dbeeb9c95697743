//! Stopword filtering
//!
//! English stopwords come from one of two lists:
//!
//! - `nltk`: the 179-word NLTK English list, compiled in
//! - `iso`: the much larger stopwords-iso English list from the `stop-words` crate
//!
//! A list can also be read from an NLTK-style data directory
//! (`corpora/stopwords/english`, one word per line), see `infra::resources`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

/// Which built-in English stopword list to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordList {
    /// NLTK's English list
    #[default]
    Nltk,
    /// stopwords-iso English list
    Iso,
}

/// NLTK English stopwords
const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't",
    "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
    "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// True for a lowercase word on the NLTK list. The sentence
/// splitter uses these as likely sentence starters.
pub fn is_function_word(word: &str) -> bool {
    NLTK_ENGLISH.contains(&word)
}

/// A set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english(StopwordList::Nltk)
    }
}

impl StopwordFilter {
    /// Load one of the built-in English lists
    pub fn english(list: StopwordList) -> Self {
        let stopwords = match list {
            StopwordList::Nltk => NLTK_ENGLISH.iter().map(|s| s.to_string()).collect(),
            StopwordList::Iso => get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        };
        Self { stopwords }
    }

    /// Create an empty filter (no filtering)
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Parse a word-per-line resource file. Blank lines are ignored.
    pub fn from_lines(contents: &str) -> Self {
        let stopwords = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { stopwords }
    }

    /// Check if an already-lowercased word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nltk_list() {
        let filter = StopwordFilter::english(StopwordList::Nltk);

        assert_eq!(filter.len(), 179);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("are"));
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("too"));
        assert!(filter.is_stopword("don't"));
        assert!(!filter.is_stopword("dogs"));
        assert!(!filter.is_stopword("great"));
    }

    #[test]
    fn test_iso_list_is_larger() {
        let iso = StopwordFilter::english(StopwordList::Iso);
        assert!(iso.is_stopword("the"));
        assert!(iso.len() > StopwordFilter::english(StopwordList::Nltk).len());
    }

    #[test]
    fn test_from_lines() {
        let filter = StopwordFilter::from_lines("The\nand\n\n  of  \n");
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("of"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_function_words() {
        assert!(is_function_word("the"));
        assert!(is_function_word("it"));
        assert!(!is_function_word("The"));
        assert!(!is_function_word("sales"));
    }

    #[test]
    fn test_list_names_round_trip_through_json() {
        assert_eq!(serde_json::to_string(&StopwordList::Iso).unwrap(), "\"iso\"");
        let parsed: StopwordList = serde_json::from_str("\"nltk\"").unwrap();
        assert_eq!(parsed, StopwordList::Nltk);
    }
}
