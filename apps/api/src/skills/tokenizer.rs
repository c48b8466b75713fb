use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// A token starts with a letter or digit and may carry skill punctuation inside it
// (c++, c#, node.js, ui/ux, problem-solving).
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}+#./\-]*").expect("valid regex"));

// Phrases never span these boundaries.
static SEGMENT_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\n\r,;|•·:()\[\]]+|[.!?](?:\s|$)").expect("valid regex"));

/// Lowercased word tokens with trailing sentence punctuation removed.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().trim_end_matches(['.', '/', '-']).to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Every distinct word n-gram of length `1..=max_words`, in first-seen order.
/// N-grams stay inside a single line or list item.
pub fn candidate_phrases(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();

    for segment in SEGMENT_BREAK.split(text) {
        let tokens = tokenize(segment);
        for start in 0..tokens.len() {
            let longest = max_words.min(tokens.len() - start);
            for len in 1..=longest {
                let phrase = tokens[start..start + len].join(" ");
                if seen.insert(phrase.clone()) {
                    phrases.push(phrase);
                }
            }
        }
    }

    phrases
}
