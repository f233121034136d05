//! Penn Treebank style word tokenizer.
//!
//! Text is split into sentences first, then each sentence goes through an
//! ordered list of regex rewrites that pad punctuation and clitics with
//! spaces before a whitespace split. Numbers such as `3.14` and `1,000`
//! stay whole, `don't` becomes `do` + `n't`, and double quotes become the
//! treebank tokens `` and ''.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that take a trailing period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "e.g",
    "i.e",
];

type Rewrite = (Lazy<Regex>, &'static str);

static STARTING_QUOTES: [Rewrite; 4] = [
    (
        Lazy::new(|| Regex::new(r"([«“‘„]|`+)").unwrap()),
        " ${1} ",
    ),
    (Lazy::new(|| Regex::new(r#"^""#).unwrap()), "``"),
    (Lazy::new(|| Regex::new(r"(``)").unwrap()), " ${1} "),
    (
        Lazy::new(|| Regex::new(r#"([ (\[{<])("|'{2})"#).unwrap()),
        "${1} `` ",
    ),
];

static PUNCTUATION: [Rewrite; 8] = [
    (Lazy::new(|| Regex::new(r"([:,])([^\d])").unwrap()), " ${1} ${2}"),
    (Lazy::new(|| Regex::new(r"([:,])$").unwrap()), " ${1} "),
    (Lazy::new(|| Regex::new(r"\.{2,}").unwrap()), " ${0} "),
    (Lazy::new(|| Regex::new(r"[;@#$%&]").unwrap()), " ${0} "),
    (
        Lazy::new(|| Regex::new(r#"([^.])(\.)([\])}>"']*)\s*$"#).unwrap()),
        "${1} ${2}${3} ",
    ),
    (Lazy::new(|| Regex::new(r"[?!]").unwrap()), " ${0} "),
    (Lazy::new(|| Regex::new(r"([^'])' ").unwrap()), "${1} ' "),
    (Lazy::new(|| Regex::new(r"[*]").unwrap()), " ${0} "),
];

static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\]\[(){}<>]").unwrap());

static DOUBLE_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"--").unwrap());

static ENDING_QUOTES: [Rewrite; 6] = [
    (Lazy::new(|| Regex::new(r"([»”’])").unwrap()), " ${1} "),
    (Lazy::new(|| Regex::new(r"''").unwrap()), " '' "),
    (Lazy::new(|| Regex::new(r#"""#).unwrap()), " '' "),
    (Lazy::new(|| Regex::new(r"(\S)('')").unwrap()), "${1} ${2} "),
    (
        Lazy::new(|| Regex::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ").unwrap()),
        "${1} ${2} ",
    ),
    (
        Lazy::new(|| Regex::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ").unwrap()),
        "${1} ${2} ",
    ),
];

static CONTRACTIONS: [Rewrite; 10] = [
    (Lazy::new(|| Regex::new(r"(?i)\b(can)(not)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(d)('ye)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(gim)(me)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(gon)(na)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(got)(ta)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(lem)(me)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(more)('n)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i)\b(wan)(na)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i) ('t)(is)\b").unwrap()), " ${1} ${2} "),
    (Lazy::new(|| Regex::new(r"(?i) ('t)(was)\b").unwrap()), " ${1} ${2} "),
];

/// English word tokenizer
pub struct WordTokenizer;

impl WordTokenizer {
    /// Split text into word tokens, sentence by sentence
    pub fn tokenize(text: &str) -> Vec<String> {
        Self::split_sentences(text)
            .into_iter()
            .flat_map(Self::tokenize_sentence)
            .collect()
    }

    /// Tokenize text already known to be one sentence
    pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
        let mut text = apply(&STARTING_QUOTES, sentence.to_string());
        text = apply(&PUNCTUATION, text);
        text = BRACKETS.replace_all(&text, " ${0} ").into_owned();
        text = DOUBLE_DASHES.replace_all(&text, " -- ").into_owned();

        // Clitic rules need a space on both ends
        text = format!(" {} ", text);
        text = apply(&ENDING_QUOTES, text);
        text = apply(&CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }

    /// Split on `.`, `?` or `!` followed by whitespace and a sentence opener
    pub fn split_sentences(text: &str) -> Vec<&str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !matches!(c, '.' | '?' | '!') {
                i += 1;
                continue;
            }

            let mut end = i + 1;
            while end < chars.len() && is_closing(chars[end].1) {
                end += 1;
            }
            if end >= chars.len() || !chars[end].1.is_whitespace() {
                i += 1;
                continue;
            }

            let mut next = end;
            while next < chars.len() && chars[next].1.is_whitespace() {
                next += 1;
            }
            if next >= chars.len() {
                break;
            }

            let abbreviated = c == '.' && is_abbreviation(&text[start..pos]);
            if opens_sentence(chars[next].1) && !abbreviated {
                sentences.push(&text[start..chars[end].0]);
                start = chars[next].0;
                i = next;
            } else {
                i += 1;
            }
        }

        if start < text.len() {
            sentences.push(&text[start..]);
        }

        sentences
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

fn apply(rewrites: &[Rewrite], mut text: String) -> String {
    for (pattern, replacement) in rewrites {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}')
}

fn opens_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '\u{201C}')
}

/// Whether the word right before a period is an initial or a known abbreviation
fn is_abbreviation(preceding: &str) -> bool {
    let word = preceding
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let mut chars = word.chars();
    let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    single_letter || ABBREVIATIONS.contains(&word.as_str())
}
