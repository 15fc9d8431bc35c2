// key-term ranking - frequency-ranked vocabulary from comment-stripped code

use crate::analysis::extract::strip_comments;
use crate::patterns::LanguagePatternSet;
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

/// how many key concepts a summary reports by default
pub const DEFAULT_TERM_LIMIT: usize = 5;

// the classic english stopword list; apostrophe forms are omitted because
// tokens are alphabetic runs and can never contain one
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref STOPWORDS: HashSet<&'static str> = ENGLISH_STOPWORDS.iter().copied().collect();
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// surface the dominant vocabulary of a code block.
///
/// pipeline: strip comments (an independent pass from the extractor's),
/// split camelCase and snake_case identifiers, lowercase and tokenize into
/// alphabetic runs, drop english stopwords, stem, then rank by descending
/// frequency with ties kept in first-occurrence order. fewer surviving terms
/// than `limit` is fine; zero is an empty list, never an error.
pub fn rank(code: &str, patterns: &LanguagePatternSet, limit: usize) -> Vec<String> {
    let comment_free = strip_comments(code, patterns);
    let normalised = split_identifiers(&comment_free).to_lowercase();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in WORD_TOKEN.find_iter(&normalised) {
        let token = token.as_str();
        // numeric or mixed alphanumeric tokens carry no vocabulary
        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        if STOPWORDS.contains(token) {
            continue;
        }
        let stem = STEMMER.stem(token).into_owned();
        let count = counts.entry(stem.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(stem);
        }
        *count += 1;
    }

    // stable sort keeps first-occurrence order between equal counts
    first_seen.sort_by(|a, b| {
        let count_a = counts.get(a).copied().unwrap_or(0);
        let count_b = counts.get(b).copied().unwrap_or(0);
        count_b.cmp(&count_a)
    });
    first_seen.truncate(limit);
    first_seen
}

/// insert a word boundary where a lowercase letter or digit is followed by
/// an uppercase letter, and turn underscores into spaces, so "camelCase" and
/// "snake_case" identifiers each contribute their component words
fn split_identifiers(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + code.len() / 8);
    let mut prev: Option<char> = None;
    for ch in code.chars() {
        if ch == '_' {
            out.push(' ');
            prev = Some(' ');
            continue;
        }
        if ch.is_ascii_uppercase() {
            if let Some(p) = prev {
                if p.is_ascii_lowercase() || p.is_ascii_digit() {
                    out.push(' ');
                }
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::lookup;

    fn rank_python(code: &str, limit: usize) -> Vec<String> {
        rank(code, lookup("python").unwrap(), limit)
    }

    #[test]
    fn splits_snake_case_into_component_words() {
        let terms = rank_python("def process_data(x): return x", 5);
        assert!(terms.contains(&"process".to_string()));
        assert!(terms.contains(&"data".to_string()));
    }

    #[test]
    fn splits_camel_case_into_component_words() {
        let terms = rank_python("parseConfig = makeParser()", 5);
        assert!(terms.contains(&"pars".to_string()) || terms.contains(&"parse".to_string()));
        assert!(terms.contains(&"config".to_string()));
    }

    #[test]
    fn drops_english_stopwords() {
        let terms = rank_python("the value of the counter is the total", 10);
        assert!(!terms.contains(&"the".to_string()));
        assert!(!terms.contains(&"of".to_string()));
        assert!(!terms.contains(&"is".to_string()));
        assert!(terms.contains(&"valu".to_string()) || terms.contains(&"value".to_string()));
    }

    #[test]
    fn ranks_by_descending_frequency() {
        let terms = rank_python("alpha beta alpha gamma alpha beta", 5);
        assert_eq!(terms[0], "alpha");
        assert_eq!(terms[1], "beta");
        assert_eq!(terms[2], "gamma");
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let terms = rank_python("zebra apple mango", 5);
        assert_eq!(terms, vec!["zebra", "appl", "mango"]);
    }

    #[test]
    fn ignores_comment_text() {
        let terms = rank_python("# banana banana banana\nkiwi = load()", 5);
        assert!(!terms.contains(&"banana".to_string()));
        assert!(terms.contains(&"kiwi".to_string()));
    }

    #[test]
    fn discards_numeric_and_mixed_tokens() {
        let terms = rank_python("v2 = 42 + weight", 5);
        assert!(!terms.iter().any(|t| t.contains('2') || t == "v2"));
        assert!(terms.contains(&"weight".to_string()));
    }

    #[test]
    fn respects_the_limit() {
        let terms = rank_python("one atom bond cell dust echo fern", 3);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn empty_vocabulary_is_an_empty_list() {
        assert!(rank_python("42 1 2 3", 5).is_empty());
    }
}
