// ============================================================
// Layer 5 — Sentence Segmentation
// ============================================================
// Splits running text into sentences, Punkt-style.
//
// A sentence ends at a run of terminal punctuation (. ? !),
// plus any closing quotes or brackets glued to it, when the
// run is followed by whitespace or the end of the text.
//
// A single period does NOT end a sentence when the word it
// closes is:
//   - a known abbreviation          "Dr. Smith", "Inc. reported"
//   - a dotted initialism            "U.S. economy", "e.g. this", "5 p.m. today"
//   - a single-letter initial        "J. Smith"
//
// A single letter is only an initial when the next word is not a
// likely sentence starter. "plan B. The results" splits, because
// "The" is a capitalised function word; "J. Doe" does not.
//
// Periods inside a word never qualify because they are not
// followed by whitespace ("3.14", "example.com").
//
// An ellipsis ("...") ends a sentence only when the next word
// starts with an uppercase letter.
//
// Sentences are returned as trimmed slices of the input, so the
// text inside a sentence (including newlines) is untouched.

use crate::nlp::stopwords::is_function_word;

const TERMINALS: &[char] = &['.', '?', '!'];

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{BB}'];

const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '\u{201C}', '\u{2018}', '\u{AB}'];

/// Lowercase abbreviations (without their final period) that
/// never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "rev", "gen", "gov",
    "sen", "rep", "col", "lt", "sgt", "capt", "cmdr", "inc", "ltd", "co", "corp", "dept",
    "univ", "assn", "bros", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "fig", "figs", "eq", "eqs", "vol", "ed", "eds", "pp", "approx",
    "cf", "al", "ave", "blvd", "ft",
];

/// Split `text` into sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while let Some(c) = text[i..].chars().next() {
        if !TERMINALS.contains(&c) {
            i += c.len_utf8();
            continue;
        }

        // Terminal run: "." / "?!" / "..."
        let run_start = i;
        let mut end = take_while(text, i, |c| TERMINALS.contains(&c));
        let run = &text[run_start..end];

        // Closing quotes and brackets belong to the sentence they close
        end = take_while(text, end, |c| CLOSERS.contains(&c));

        let rest = &text[end..];
        let at_boundary = rest.chars().next().map_or(true, char::is_whitespace);

        if at_boundary && ends_sentence(&text[start..run_start], run, rest) {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        i = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Advance from byte `from` over every char matching `pred`
fn take_while(text: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = from;
    for c in text[from..].chars() {
        if !pred(c) {
            break;
        }
        end += c.len_utf8();
    }
    end
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Decide whether the terminal `run` closing `before` ends a sentence
fn ends_sentence(before: &str, run: &str, rest: &str) -> bool {
    if run.contains(|c: char| c == '?' || c == '!') {
        return true;
    }

    // Ellipsis: only before a capitalised word (or the end of the text)
    if run.len() > 1 {
        return rest
            .trim_start()
            .chars()
            .next()
            .map_or(true, char::is_uppercase);
    }

    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(OPENERS)
        .to_lowercase();

    if ABBREVIATIONS.contains(&word.as_str()) {
        return false;
    }
    match letter_parts(&word) {
        0 => true,
        1 => starts_sentence(rest),
        _ => false,
    }
}

/// Number of dot-separated single letters in `word` ("u.s" → 2,
/// "b" → 1), or 0 if any part is not a single letter.
fn letter_parts(word: &str) -> usize {
    let single = |part: &str| {
        let mut chars = part.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    };
    if word.is_empty() || !word.split('.').all(single) {
        return 0;
    }
    word.split('.').count()
}

/// True when the next word is capitalised and is a common
/// function word ("The", "It", "We", ...)
fn starts_sentence(rest: &str) -> bool {
    let Some(next) = rest.split_whitespace().next() else {
        return true;
    };
    let next = next
        .trim_start_matches(OPENERS)
        .trim_end_matches(|c: char| !c.is_alphanumeric());
    next.chars().next().is_some_and(char::is_uppercase) && is_function_word(&next.to_lowercase())
}
