// Resume analyzer: skills, ATS compatibility, grammar/readability, score and feedback.
// Everything here is a pure function of the extracted text; nothing is cached.

pub mod ats;
pub mod grammar;
pub mod handlers;
pub mod scoring;

use serde::{Deserialize, Serialize};

use crate::analysis::ats::{ats_compatibility_check, AtsReport};
use crate::analysis::grammar::{check_grammar_and_readability, GrammarReport};
use crate::analysis::scoring::{generate_suggestions, positive_feedback, score_from_reports};
use crate::skills::{classify_skills, ClassifiedSkills};

/// Full analyzer output for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub resume_text: String,
    pub extracted_skills: ClassifiedSkills,
    pub ats_results: AtsReport,
    pub resume_score: u8,
    pub score_feedback: String,
    pub missing_sections: Vec<String>,
    pub suggestions: Vec<String>,
    pub grammar_results: GrammarReport,
    pub positive_feedback: String,
}

pub fn analyze_resume(resume_text: &str) -> ResumeAnalysis {
    let extracted_skills = classify_skills(resume_text);
    let grammar_results = check_grammar_and_readability(resume_text);
    let ats_results = ats_compatibility_check(resume_text);
    let score = score_from_reports(resume_text, &grammar_results, &ats_results);
    let suggestions = generate_suggestions(resume_text, &grammar_results);

    ResumeAnalysis {
        resume_text: resume_text.to_string(),
        extracted_skills,
        ats_results,
        resume_score: score.resume_score,
        score_feedback: score.feedback,
        missing_sections: score.missing_sections,
        suggestions,
        grammar_results,
        positive_feedback: positive_feedback(score.resume_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Sam Lee | sam.lee@example.com\n\n\
        Summary\nFull-stack developer focused on Python and React JS.\n\n\
        Experience\nI developed Django services. I led a team of four with strong leadership.\n\n\
        Skills\nPython, SQL, HTML, CSS, Teamwork\n\n\
        Education\nBSc Informatics";

    #[test]
    fn test_analysis_aggregates_all_passes() {
        let analysis = analyze_resume(RESUME);

        assert_eq!(
            analysis.extracted_skills.hard_skills,
            vec!["CSS", "Django", "HTML", "Python", "React JS", "SQL"]
        );
        assert_eq!(
            analysis.extracted_skills.soft_skills,
            vec!["Leadership", "Teamwork"]
        );
        assert!(analysis.ats_results.ats_issues.is_empty());
        assert!(analysis.missing_sections.is_empty());
        assert!(analysis.grammar_results.grammar_mistakes.is_empty());
        assert_eq!(analysis.resume_score, 100);
        assert!(!analysis.positive_feedback.is_empty());
    }

    #[test]
    fn test_score_always_in_range() {
        for text in ["", "x", "Developed. Built. Led. Managed. Wrote.", RESUME] {
            let analysis = analyze_resume(text);
            assert!(analysis.resume_score <= 100);
        }
    }

    #[test]
    fn test_blank_resume_gets_no_praise() {
        let analysis = analyze_resume("");
        assert!(analysis.positive_feedback.is_empty());
        assert!(analysis.extracted_skills.hard_skills.is_empty());
        assert_eq!(analysis.missing_sections.len(), 4);
    }
}
