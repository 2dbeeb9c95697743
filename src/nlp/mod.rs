// ============================================================
// Layer 5 — Language Layer
// ============================================================
// English text segmentation and stopword lists:
//
//   sentences.rs — Punkt-style sentence splitting
//   words.rs     — Treebank-style word tokenisation
//   stopwords.rs — English stopword lists (NLTK or ISO)
//
// Everything here is a pure function of its input plus a
// fixed word list, so the summarizer stays deterministic.

pub mod sentences;
pub mod stopwords;
pub mod words;
