//! Job matching: skills required by a job description vs. skills shown in a resume.
//!
//! match_score = |job ∩ resume| / |job| × 100, rounded to 2 decimals; 0 when the job
//! description yields no skills.

pub mod handlers;
pub mod repository;

use serde::{Deserialize, Serialize};

use crate::skills::{extract_resume_skills, extract_skills, SkillsTaxonomy};

/// How many missing skills the feedback names.
const TOP_MISSING_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub feedback: String,
}

pub fn compute_match_score(matched: usize, job_skills: usize) -> f64 {
    if job_skills == 0 {
        return 0.0;
    }
    let score = matched as f64 / job_skills as f64 * 100.0;
    (score * 100.0).round() / 100.0
}

/// Score-banded verdict followed by the top missing skills, if any.
pub fn generate_match_feedback(match_score: f64, missing_skills: &[String]) -> String {
    let mut feedback = if match_score > 85.0 {
        "Excellent match! Your resume is well-aligned with the job description.".to_string()
    } else if match_score > 70.0 {
        "Good match! Your resume fits well, but improving a few key areas could make it stronger."
            .to_string()
    } else if match_score > 50.0 {
        "Decent match. You have relevant skills, but adding more industry-specific expertise would help."
            .to_string()
    } else {
        "Poor match. Many key skills are missing. Consider improving your resume by adding relevant skills and experience."
            .to_string()
    };

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(TOP_MISSING_SKILLS)
            .map(String::as_str)
            .collect();
        feedback.push_str(&format!(
            " Focus on improving these skills: {}.",
            top.join(", ")
        ));
    }

    feedback
}

pub fn match_skills(
    resume_text: &str,
    job_description: &str,
    taxonomy: &SkillsTaxonomy,
) -> MatchReport {
    let job_skills = extract_skills(job_description, taxonomy);
    let resume_skills = extract_resume_skills(resume_text, taxonomy);

    let matched_skills: Vec<String> = job_skills.intersection(&resume_skills).cloned().collect();
    let missing_skills: Vec<String> = job_skills.difference(&resume_skills).cloned().collect();

    let match_score = compute_match_score(matched_skills.len(), job_skills.len());
    let feedback = generate_match_feedback(match_score, &missing_skills);

    MatchReport {
        match_score,
        matched_skills,
        missing_skills,
        feedback,
    }
}
