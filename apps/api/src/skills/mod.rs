//! Skill extraction: candidate phrases from free text, fuzzy-matched against a taxonomy.
//!
//! Every candidate phrase is compared with every category's skill list; a known alias
//! ("node" for Node.js) wins outright, otherwise the best match per category is kept when
//! it clears `fuzzy::MATCH_THRESHOLD`. Results are sets, so order
//! and repetition in the input do not matter.

pub mod fuzzy;
pub mod taxonomy;
pub mod tokenizer;

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use taxonomy::SkillsTaxonomy;

use fuzzy::{accepts, best_match};
use taxonomy::{resolve_alias, HARD_SKILLS_CATEGORY, SOFT_SKILLS_CATEGORY};
use tokenizer::candidate_phrases;

/// Headings that mark a resume section as a source of skills.
const SKILL_BEARING_SECTIONS: &[&str] = &["projects", "certifications", "experience", "skills"];

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

static BUILTIN_TAXONOMY: Lazy<SkillsTaxonomy> = Lazy::new(SkillsTaxonomy::builtin);

/// Hard and soft skills found in a resume, in taxonomy casing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSkills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

/// Matched skills grouped by category, in the taxonomy's own casing.
pub fn extract_categorized(
    text: &str,
    taxonomy: &SkillsTaxonomy,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut found: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    if taxonomy.is_empty() {
        return found;
    }

    for candidate in candidate_phrases(text, taxonomy.max_phrase_words()) {
        for (category, skills) in taxonomy.categories() {
            let hit = resolve_alias(&candidate, skills)
                .map(|skill| (skill, 100))
                .or_else(|| best_match(&candidate, skills));
            if let Some((skill, score)) = hit {
                if accepts(score) {
                    debug!("'{candidate}' matched {category}/{skill} ({score})");
                    found
                        .entry(category.to_string())
                        .or_default()
                        .insert(skill.to_string());
                }
            }
        }
    }

    found
}

/// All matched skills, canonicalized to lowercase.
pub fn extract_skills(text: &str, taxonomy: &SkillsTaxonomy) -> BTreeSet<String> {
    extract_categorized(text, taxonomy)
        .into_values()
        .flatten()
        .map(|skill| skill.to_lowercase())
        .collect()
}

/// Skills from the parts of a resume that usually carry them. The resume is split into
/// sections on blank lines; only sections mentioning projects, certifications,
/// experience or skills are scanned. A resume with no such section is scanned whole.
pub fn extract_resume_skills(resume_text: &str, taxonomy: &SkillsTaxonomy) -> BTreeSet<String> {
    let lowered = resume_text.to_lowercase();
    let sections: Vec<&str> = BLANK_LINE
        .split(&lowered)
        .filter(|section| {
            SKILL_BEARING_SECTIONS
                .iter()
                .any(|heading| section.contains(heading))
        })
        .collect();

    if sections.is_empty() {
        return extract_skills(resume_text, taxonomy);
    }

    sections
        .into_iter()
        .flat_map(|section| extract_skills(section, taxonomy))
        .collect()
}

/// Splits a resume's skills into the built-in hard and soft lists.
pub fn classify_skills(text: &str) -> ClassifiedSkills {
    let mut found = extract_categorized(text, &BUILTIN_TAXONOMY);
    let mut take = |category: &str| -> Vec<String> {
        found
            .remove(category)
            .map(|skills| skills.into_iter().collect())
            .unwrap_or_default()
    };
    ClassifiedSkills {
        hard_skills: take(HARD_SKILLS_CATEGORY),
        soft_skills: take(SOFT_SKILLS_CATEGORY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy(json: &str) -> SkillsTaxonomy {
        SkillsTaxonomy::from_json_str(json).unwrap()
    }

    fn tech() -> SkillsTaxonomy {
        taxonomy(
            r#"{
                "languages": ["Python", "Java", "JavaScript", "Rust", "C++"],
                "data": ["Machine Learning", "SQL", "PostgreSQL"],
                "soft": ["Leadership", "Teamwork"]
            }"#,
        )
    }

    #[test]
    fn test_extract_exact_and_multiword() {
        let skills = extract_skills(
            "Experienced in Python and machine learning. Led a team with strong leadership.",
            &tech(),
        );
        assert!(skills.contains("python"));
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("leadership"));
        assert!(!skills.contains("java"));
    }

    #[test]
    fn test_extract_fuzzy_spelling() {
        let skills = extract_skills("Proficient with Postgresql and Javascript", &tech());
        assert!(skills.contains("postgresql"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_extract_is_order_insensitive_and_deduplicated() {
        let a = extract_skills("Rust, Python, Rust, SQL", &tech());
        let b = extract_skills("SQL\nPython\nRust", &tech());
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_extract_empty_taxonomy() {
        assert!(extract_skills("Python Rust SQL", &SkillsTaxonomy::default()).is_empty());
    }

    #[test]
    fn test_extract_no_skills_in_text() {
        assert!(extract_skills("We value punctuality and good coffee.", &tech()).is_empty());
    }

    #[test]
    fn test_resume_skills_only_from_skill_sections() {
        let resume = "Summary\nI like Java in my spare time\n\n\
                      Experience\nBuilt Rust services\n\n\
                      Hobbies\nC++ game modding";
        let skills = extract_resume_skills(resume, &tech());
        assert!(skills.contains("rust"));
        assert!(!skills.contains("java"));
        assert!(!skills.contains("c++"));
    }

    #[test]
    fn test_resume_skills_fall_back_to_whole_text() {
        let skills = extract_resume_skills("Python developer with SQL background", &tech());
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_classify_builtin_skills() {
        let classified =
            classify_skills("Skills: Python, React JS, Node.js, teamwork and time management");
        assert_eq!(classified.hard_skills, vec!["Node.js", "Python", "React JS"]);
        assert_eq!(classified.soft_skills, vec!["Teamwork", "Time Management"]);
    }
}
