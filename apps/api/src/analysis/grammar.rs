//! Grammar and readability heuristics.
//!
//! Verb detection is lexical: a curated set of resume action verbs plus their past and
//! third-person forms, and common auxiliaries. Many of those forms double as nouns
//! ("tests", "designs", "work"), so a form only counts as a verb where its position
//! makes that reading likely.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const TENSE_MISTAKE: &str =
    "Inconsistent verb tenses detected. Ensure past and present tense usage is correct.";
pub const NO_TEXT: &str = "No text provided.";
pub const NO_ISSUES: &str = "No grammar issues detected. Your resume is well-written!";
pub const GOOD_READABILITY: &str = "Good readability";
pub const NEEDS_IMPROVEMENT: &str = "Needs improvement";
pub const NOT_APPLICABLE: &str = "N/A";

/// Average words per sentence below which readability counts as good.
const READABLE_SENTENCE_WORDS: f64 = 20.0;

const ACTION_VERBS: &[&str] = &[
    "analyze", "automate", "build", "coordinate", "collaborate", "conduct", "create",
    "deliver", "deploy", "design", "develop", "drive", "establish", "handle", "implement",
    "improve", "increase", "launch", "lead", "maintain", "manage", "mentor", "optimize",
    "organize", "oversee", "own", "plan", "present", "reduce", "research", "run", "support",
    "teach", "test", "train", "use", "work", "write",
];

const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("build", "built"),
    ("drive", "drove"),
    ("lead", "led"),
    ("oversee", "oversaw"),
    ("plan", "planned"),
    ("run", "ran"),
    ("teach", "taught"),
    ("write", "wrote"),
];

const PAST_AUXILIARIES: &[&str] = &["was", "were", "had", "did"];
const PRESENT_AUXILIARIES: &[&str] = &["is", "am", "are", "has", "does"];
const SUBJECT_PRONOUNS: &[&str] = &["i", "we", "he", "she", "they", "you", "it"];
/// Words after which a third-person `-s` form reads as a verb: "she manages", "who leads".
const THIRD_PERSON_SUBJECTS: &[&str] = &["he", "she", "it", "who", "that"];

/// Lines this short with every word capitalized are headings or job titles.
const HEADING_MAX_WORDS: usize = 3;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").expect("valid regex"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'\-]*").expect("valid regex"));

struct VerbLexicon {
    base: HashSet<String>,
    past: HashSet<String>,
    third_person: HashSet<String>,
}

static LEXICON: Lazy<VerbLexicon> = Lazy::new(|| {
    let mut base = HashSet::new();
    let mut past: HashSet<String> = PAST_AUXILIARIES.iter().map(|s| s.to_string()).collect();
    let mut third = HashSet::new();

    for &verb in ACTION_VERBS {
        base.insert(verb.to_string());
        let past_form = IRREGULAR_PAST
            .iter()
            .find(|(b, _)| *b == verb)
            .map(|(_, p)| p.to_string())
            .unwrap_or_else(|| regular_past(verb));
        past.insert(past_form);
        third.insert(third_person(verb));
    }

    VerbLexicon {
        base,
        past,
        third_person: third,
    }
});

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{verb}d")
    } else {
        format!("{verb}ed")
    }
}

fn third_person(verb: &str) -> String {
    if verb.ends_with("ch") || verb.ends_with("sh") || verb.ends_with('s') {
        format!("{verb}es")
    } else {
        format!("{verb}s")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub grammar_mistakes: Vec<String>,
    /// Human-readable summary of `grammar_mistakes`.
    pub summary: String,
    pub readability_score: Option<f64>,
    pub readability_check: String,
}

impl GrammarReport {
    pub fn has_good_readability(&self) -> bool {
        self.readability_check == GOOD_READABILITY
    }

    pub fn needs_readability_work(&self) -> bool {
        self.readability_check == NEEDS_IMPROVEMENT
    }
}

pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn words(sentence: &str) -> Vec<&str> {
    WORD.find_iter(sentence).map(|m| m.as_str()).collect()
}

fn is_heading(words: &[&str]) -> bool {
    words.len() <= HEADING_MAX_WORDS
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

/// Whether `words[i]` is a present-tense verb. Auxiliaries always are. A third-person form
/// needs a subject right before it or must open a non-heading line ("Manages a team of
/// five"); elsewhere it is read as a plural noun. A bare base form counts after "I"/"we".
fn is_present_at(words: &[&str], i: usize, heading: bool) -> bool {
    let lower = words[i].to_lowercase();
    let previous = i
        .checked_sub(1)
        .map(|p| words[p].to_lowercase())
        .unwrap_or_default();

    if PRESENT_AUXILIARIES.contains(&lower.as_str()) {
        return true;
    }
    if LEXICON.third_person.contains(&lower) {
        return if i == 0 {
            !heading
        } else {
            THIRD_PERSON_SUBJECTS.contains(&previous.as_str())
        };
    }
    LEXICON.base.contains(&lower) && matches!(previous.as_str(), "i" | "we")
}

fn has_mixed_tenses(sentences: &[&str]) -> bool {
    let mut past = false;
    let mut present = false;

    for sentence in sentences {
        let words = words(sentence);
        let heading = is_heading(&words);
        for (i, word) in words.iter().enumerate() {
            if LEXICON.past.contains(&word.to_lowercase()) {
                past = true;
            }
            if is_present_at(&words, i, heading) {
                present = true;
            }
        }
    }

    past && present
}

/// Flags a sentence that opens with an inflected verb ("Developed ...", "Manages ...")
/// and has no subject pronoun. Bare base forms ("Work", "Lead", "Design") open
/// headings and job titles far more often than sentences, so they are not flagged.
fn missing_subject(sentence: &str) -> Option<String> {
    let words = words(sentence);
    let first = words.first()?;
    if is_heading(&words) {
        return None;
    }
    let lower = first.to_lowercase();
    if !LEXICON.past.contains(&lower) && !LEXICON.third_person.contains(&lower) {
        return None;
    }
    let has_subject = words
        .iter()
        .any(|w| SUBJECT_PRONOUNS.contains(&w.to_lowercase().as_str()));
    if has_subject {
        return None;
    }
    Some(format!(
        "Possible missing subject near '{first}'. Ensure sentence clarity."
    ))
}

/// Checks tense consistency, subject presence and sentence length.
pub fn check_grammar_and_readability(text: &str) -> GrammarReport {
    if text.trim().is_empty() {
        return GrammarReport {
            grammar_mistakes: vec![],
            summary: NO_TEXT.to_string(),
            readability_score: None,
            readability_check: NOT_APPLICABLE.to_string(),
        };
    }

    let sentences = split_sentences(text);
    let mut mistakes = Vec::new();

    if has_mixed_tenses(&sentences) {
        mistakes.push(TENSE_MISTAKE.to_string());
    }
    mistakes.extend(sentences.iter().filter_map(|s| missing_subject(s)));

    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let avg_sentence_length = total_words as f64 / sentences.len().max(1) as f64;
    let readability_score = ((100.0 - avg_sentence_length).max(0.0) * 10.0).round() / 10.0;
    let readability_check = if avg_sentence_length < READABLE_SENTENCE_WORDS {
        GOOD_READABILITY
    } else {
        NEEDS_IMPROVEMENT
    };

    let summary = if mistakes.is_empty() {
        NO_ISSUES.to_string()
    } else {
        format!("{} potential grammar issue(s) found.", mistakes.len())
    };

    GrammarReport {
        grammar_mistakes: mistakes,
        summary,
        readability_score: Some(readability_score),
        readability_check: readability_check.to_string(),
    }
}
