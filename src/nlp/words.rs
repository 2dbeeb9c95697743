// ============================================================
// Layer 5 — Word Tokenizer
// ============================================================
// Treebank-style word segmentation. Not a whitespace split:
//
//   "I can't go, don't ask."  →  I  ca  n't  go  ,  do  n't  ask  .
//   "It's well-known (U.S.)." →  It  's  well-known  (  U.S.  )  .
//
// Steps, per sentence:
//   1. Pad punctuation that is always its own token:
//        ; @ # $ % & ? ! brackets, double quotes, curly quotes
//      plus "," and ":" unless a digit follows ("1,000" stays whole),
//      ellipses "..." and double dashes "--".
//   2. Split on whitespace.
//   3. Split the final period of the sentence off its word.
//      Other periods stay put: "U.S.", "3.14", "Dr.".
//   4. Split fixed contractions ("cannot" → can not, "gonna" → gon na)
//      and clitics ('s 'm 'd 'll 're 've n't, a bare trailing ').
//
// Hyphens, slashes and inner apostrophes are left inside words,
// so "well-known" and "and/or" are single tokens.
//
// Tokenising a whole text runs the sentence splitter first and
// tokenises each sentence, so every sentence-final period is
// separated but abbreviations inside a sentence are not.

use crate::nlp::sentences::split_sentences;

/// Characters that are always split into their own token
const ALWAYS_PADDED: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"',
    '`', '\u{AB}', '\u{BB}', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{201E}',
];

/// Whole-word contractions and where to cut them
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

/// Clitic suffixes split off the end of a word, longest first
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Clitic-like starts that keep a leading apostrophe attached
const LEADING_KEEP: &[&str] = &["re", "ve", "ll", "m", "t", "s", "d", "n"];

/// Tokenise a whole text into words, sentence by sentence.
pub fn tokenize(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .flat_map(tokenize_sentence)
        .collect()
}

/// Tokenise a single sentence.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let padded = pad_punctuation(sentence);
    let mut raw: Vec<&str> = padded.split_whitespace().collect();

    // The sentence-final period (possibly followed by closing
    // single quotes) becomes its own token
    let mut tail: Vec<&str> = Vec::new();
    if let Some(last) = raw.pop() {
        let body = last.trim_end_matches('\'');
        let quotes = &last[body.len()..];
        match split_final_period(body) {
            Some((word, period)) => {
                raw.push(word);
                tail.push(period);
            }
            None if !body.is_empty() => raw.push(body),
            None => {}
        }
        if !quotes.is_empty() {
            tail.push(quotes);
        }
    }

    let mut tokens = Vec::with_capacity(raw.len() + tail.len());
    for token in raw {
        split_contractions(token, &mut tokens);
    }
    tokens.extend(tail.into_iter().map(str::to_string));
    tokens
}

/// Surround standalone punctuation with spaces
fn pad_punctuation(sentence: &str) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    let mut out = String::with_capacity(sentence.len() + 16);
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if ALWAYS_PADDED.contains(&c) {
            push_padded(&mut out, &c.to_string());
        } else if (c == ',' || c == ':') && !next.is_some_and(|n| n.is_ascii_digit()) {
            push_padded(&mut out, &c.to_string());
        } else if c == '-' && next == Some('-') {
            push_padded(&mut out, "--");
            i += 2;
            continue;
        } else if c == '.' && next == Some('.') {
            let start = i;
            while i < chars.len() && chars[i] == '.' {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            push_padded(&mut out, &run);
            continue;
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

fn push_padded(out: &mut String, token: &str) {
    out.push(' ');
    out.push_str(token);
    out.push(' ');
}

/// "pets." → ("pets", "."), but "..." and "." alone stay whole
fn split_final_period(token: &str) -> Option<(&str, &str)> {
    let word = token.strip_suffix('.')?;
    if word.is_empty() || word.ends_with('.') {
        return None;
    }
    Some((word, &token[word.len()..]))
}

/// Split fixed contractions, then clitics, pushing the pieces
fn split_contractions(token: &str, out: &mut Vec<String>) {
    for (word, cut) in CONTRACTIONS {
        if token.eq_ignore_ascii_case(word) {
            out.push(token[..*cut].to_string());
            out.push(token[*cut..].to_string());
            return;
        }
    }

    let token = split_leading_quote(token, out);
    if token.is_empty() {
        return;
    }

    for clitic in CLITICS {
        if let Some(cut) = clitic_cut(token, clitic) {
            out.push(token[..cut].to_string());
            out.push(token[cut..].to_string());
            return;
        }
    }

    // A bare closing quote: "dogs'" → dogs '
    if token.len() > 1 && token.ends_with('\'') {
        let cut = token.len() - 1;
        if !token[..cut].ends_with('\'') {
            out.push(token[..cut].to_string());
            out.push("'".to_string());
            return;
        }
    }

    out.push(token.to_string());
}

/// "'hello" → pushes "'" and returns "hello"; "'s" and "'re" are kept whole
fn split_leading_quote<'a>(token: &'a str, out: &mut Vec<String>) -> &'a str {
    let Some(rest) = token.strip_prefix('\'') else {
        return token;
    };
    let keeps = LEADING_KEEP.iter().any(|k| {
        rest.get(..k.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(k))
    });
    let followed_by_word = rest.chars().next().is_some_and(char::is_alphanumeric);
    if keeps || !followed_by_word {
        return token;
    }
    out.push("'".to_string());
    rest
}

/// Byte offset where `clitic` starts in `token`, if the token ends
/// with it (case-insensitive) and something other than a quote
/// precedes it.
fn clitic_cut(token: &str, clitic: &str) -> Option<usize> {
    let cut = token.len().checked_sub(clitic.len())?;
    if cut == 0 || !token.is_char_boundary(cut) {
        return None;
    }
    if !token[cut..].eq_ignore_ascii_case(clitic) {
        return None;
    }
    if token[..cut].ends_with('\'') {
        return None;
    }
    Some(cut)
}
