use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::fuzzy::normalize;

/// Longest phrase (in words) the extractor will try to match as one candidate.
pub const MAX_PHRASE_WORDS: usize = 4;

/// Short spellings job posts use for skills the taxonomy lists in full. An alias only
/// resolves when its target is in the category being searched.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("react", "React JS"),
    ("reactjs", "React JS"),
    ("react.js", "React JS"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("vue", "Vue.js"),
    ("vuejs", "Vue.js"),
    ("nextjs", "Next.js"),
    ("expressjs", "Express.js"),
    ("angularjs", "Angular"),
    ("golang", "Go"),
    ("postgres", "PostgreSQL"),
    ("k8s", "Kubernetes"),
];

const HARD_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "Data Analyst",
    "Machine Learning",
    "Data Science",
    "SQL",
    "Django",
    "React JS",
    "AWS",
    "C",
    "C++",
    "MongoDB",
    "MySQL",
    "UI/UX",
    "HTML",
    "CSS",
    "JavaScript",
    "Bootstrap",
    "Tailwind CSS",
    "Node.js",
    "Angular",
];

const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem-Solving",
    "Creativity",
    "Time Management",
    "Adaptability",
];

pub const HARD_SKILLS_CATEGORY: &str = "hard_skills";
pub const SOFT_SKILLS_CATEGORY: &str = "soft_skills";

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read skills database: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid skills database JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category name → canonical skill strings. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillsTaxonomy {
    categories: BTreeMap<String, Vec<String>>,
}

impl SkillsTaxonomy {
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    /// The analyzer's predefined hard/soft skill lists.
    pub fn builtin() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            HARD_SKILLS_CATEGORY.to_string(),
            HARD_SKILLS.iter().map(|s| s.to_string()).collect(),
        );
        categories.insert(
            SOFT_SKILLS_CATEGORY.to_string(),
            SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        );
        Self::new(categories)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Loads the skills database, degrading to an empty taxonomy when the file is
    /// missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(taxonomy) => {
                info!(
                    "Skills database loaded from {}: {} categories, {} skills",
                    path.display(),
                    taxonomy.category_count(),
                    taxonomy.skill_count()
                );
                taxonomy
            }
            Err(TaxonomyError::Io(e)) => {
                warn!(
                    "Skills database {} not readable ({e}); using an empty skills database",
                    path.display()
                );
                Self::default()
            }
            Err(TaxonomyError::Parse(e)) => {
                warn!(
                    "Invalid JSON format in skills database {} ({e}); using an empty skills database",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn skill_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.skill_count() == 0
    }

    /// Word length of the longest skill, bounded to `1..=MAX_PHRASE_WORDS`.
    pub fn max_phrase_words(&self) -> usize {
        self.categories
            .values()
            .flatten()
            .map(|skill| skill.split_whitespace().count())
            .max()
            .unwrap_or(1)
            .clamp(1, MAX_PHRASE_WORDS)
    }
}

/// The skill in `skills` that `candidate` is a known alias of.
pub fn resolve_alias<'a>(candidate: &str, skills: &'a [String]) -> Option<&'a str> {
    let candidate = normalize(candidate);
    let target = SKILL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == candidate)
        .map(|(_, target)| normalize(target))?;
    skills
        .iter()
        .find(|skill| normalize(skill) == target)
        .map(String::as_str)
}
