//! Resume score: starts at 100, subtracts fixed penalties, adds a flat bonus, clamps.
//!
//! score = 100 − 3·grammar_mistakes − 5·ats_issues − 5·missing_sections + 5·has_bonus_term

use serde::{Deserialize, Serialize};

use crate::analysis::ats::{ats_compatibility_check, format_section_list, missing_sections, AtsReport};
use crate::analysis::grammar::{check_grammar_and_readability, GrammarReport};

pub const GRAMMAR_PENALTY: i32 = 3;
pub const ATS_PENALTY: i32 = 5;
pub const MISSING_SECTION_PENALTY: i32 = 5;
pub const BONUS: i32 = 5;

/// Terms that earn the bonus when mentioned anywhere.
const BONUS_TERMS: &[&str] = &["certification", "achievement"];

const EXCELLENT_FEEDBACK: &str = "Excellent job! Your resume is well-structured and ATS-friendly.";
const DECENT_FEEDBACK: &str =
    "Your resume is decent but could be improved in structure and ATS compliance.";
const POOR_FEEDBACK: &str =
    "Your resume requires significant improvements. Consider revising key sections and formatting.";

const POSITIVE_FEEDBACK: &str =
    "Your resume is well-structured and optimized for ATS. Great job! Keep it up!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeScore {
    pub resume_score: u8,
    pub missing_sections: Vec<String>,
    pub feedback: String,
}

/// Penalty and bonus inputs to the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub grammar_mistakes: usize,
    pub ats_issues: usize,
    pub missing_sections: usize,
    pub has_bonus_term: bool,
}

/// Applies the penalty weights. Always lands in `0..=100`.
pub fn compose_score(inputs: ScoreInputs) -> u8 {
    let penalty = |count: usize, weight: i32| {
        i32::try_from(count)
            .unwrap_or(i32::MAX)
            .saturating_mul(weight)
    };

    let mut score = 100_i32;
    score = score.saturating_sub(penalty(inputs.grammar_mistakes, GRAMMAR_PENALTY));
    score = score.saturating_sub(penalty(inputs.ats_issues, ATS_PENALTY));
    score = score.saturating_sub(penalty(inputs.missing_sections, MISSING_SECTION_PENALTY));
    if inputs.has_bonus_term {
        score = score.saturating_add(BONUS);
    }
    score.clamp(0, 100) as u8
}

pub fn has_bonus_term(text: &str) -> bool {
    let lower = text.to_lowercase();
    BONUS_TERMS.iter().any(|term| lower.contains(term))
}

pub fn score_feedback(score: u8) -> &'static str {
    match score {
        75.. => EXCELLENT_FEEDBACK,
        50..=74 => DECENT_FEEDBACK,
        _ => POOR_FEEDBACK,
    }
}

/// Extra praise shown only for scores above 80; empty otherwise.
pub fn positive_feedback(score: u8) -> String {
    if score > 80 {
        POSITIVE_FEEDBACK.to_string()
    } else {
        String::new()
    }
}

/// Scores a resume from already-computed reports.
pub fn score_from_reports(text: &str, grammar: &GrammarReport, ats: &AtsReport) -> ResumeScore {
    let missing = missing_sections(text);
    let resume_score = compose_score(ScoreInputs {
        grammar_mistakes: grammar.grammar_mistakes.len(),
        ats_issues: ats.ats_issues.len(),
        missing_sections: missing.len(),
        has_bonus_term: has_bonus_term(text),
    });

    ResumeScore {
        resume_score,
        missing_sections: missing,
        feedback: score_feedback(resume_score).to_string(),
    }
}

/// Scores raw text on its own. The analyzer already holds the reports and goes through
/// `score_from_reports` instead.
#[allow(dead_code)]
pub fn calculate_resume_score(text: &str) -> ResumeScore {
    let grammar = check_grammar_and_readability(text);
    let ats = ats_compatibility_check(text);
    score_from_reports(text, &grammar, &ats)
}

/// Actionable suggestions: missing sections, readability, and an overall note.
pub fn generate_suggestions(text: &str, grammar: &GrammarReport) -> Vec<String> {
    let mut suggestions = Vec::new();

    let missing = missing_sections(text);
    if !missing.is_empty() {
        suggestions.push(format!(
            "Consider adding these missing sections: {}.",
            format_section_list(&missing)
        ));
    }

    if grammar.needs_readability_work() {
        suggestions
            .push("Improve readability by using shorter sentences and clearer formatting.".to_string());
    }

    if grammar.has_good_readability() {
        if grammar.grammar_mistakes.is_empty() && missing.is_empty() {
            suggestions.push(
                "Your resume is well-structured, readable, and ATS-friendly. Keep up the great work!"
                    .to_string(),
            );
        } else {
            suggestions.push(
                "Your resume is good, but minor improvements can enhance clarity and readability."
                    .to_string(),
            );
        }
    }

    suggestions
}
