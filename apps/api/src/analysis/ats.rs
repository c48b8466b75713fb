use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sections every resume is expected to have, matched as lowercase substrings.
pub const REQUIRED_SECTIONS: &[&str] = &["summary", "experience", "skills", "education"];

pub const MISSING_CONTACT: &str = "Missing contact details (phone or email).";
pub const TABLES_DETECTED: &str = "Tables or columns detected – ATS may not parse them correctly.";
pub const IMAGE_DETECTED: &str = "Image detected – ATS cannot read images.";

const TABLE_MARKERS: &[&str] = &["│", "⎜"];
const IMAGE_MARKERS: &[&str] = &["📷", "🖼️"];

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("valid regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub ats_issues: Vec<String>,
}

/// Required sections not mentioned anywhere in the text, in `REQUIRED_SECTIONS` order.
pub fn missing_sections(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    REQUIRED_SECTIONS
        .iter()
        .filter(|section| !lower.contains(*section))
        .map(|section| section.to_string())
        .collect()
}

/// `["summary", "skills"]` → `"Summary, skills"`.
pub fn format_section_list(sections: &[String]) -> String {
    let joined = sections.join(", ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn has_contact_details(text: &str) -> bool {
    PHONE.is_match(text) || EMAIL.is_match(text)
}

/// Flags content an applicant tracking system is likely to mis-parse.
pub fn ats_compatibility_check(text: &str) -> AtsReport {
    let mut issues = Vec::new();

    if !has_contact_details(text) {
        issues.push(MISSING_CONTACT.to_string());
    }
    if TABLE_MARKERS.iter().any(|m| text.contains(m)) {
        issues.push(TABLES_DETECTED.to_string());
    }
    if IMAGE_MARKERS.iter().any(|m| text.contains(m)) {
        issues.push(IMAGE_DETECTED.to_string());
    }

    let missing = missing_sections(text);
    if !missing.is_empty() {
        issues.push(format!("Missing sections: {}.", format_section_list(&missing)));
    }

    AtsReport { ats_issues: issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = "Jane Doe — jane.doe@example.com\n\
        Summary\nBackend engineer\n\nExperience\nAcme Corp\n\n\
        Skills\nRust, SQL\n\nEducation\nBSc Computer Science";

    #[test]
    fn test_complete_resume_has_no_issues() {
        assert!(ats_compatibility_check(COMPLETE).ats_issues.is_empty());
    }

    #[test]
    fn test_phone_counts_as_contact() {
        assert!(has_contact_details("Call 5551234567 anytime"));
        assert!(!has_contact_details("Call 555-123 anytime"));
    }

    #[test]
    fn test_missing_contact_and_sections() {
        let report = ats_compatibility_check("Experience\nBuilt things");
        assert_eq!(
            report.ats_issues,
            vec![
                MISSING_CONTACT.to_string(),
                "Missing sections: Summary, skills, education.".to_string(),
            ]
        );
    }

    #[test]
    fn test_table_and_image_markers() {
        let text = format!("{COMPLETE}\nName │ Role\n📷");
        let report = ats_compatibility_check(&text);
        assert_eq!(
            report.ats_issues,
            vec![TABLES_DETECTED.to_string(), IMAGE_DETECTED.to_string()]
        );
    }

    #[test]
    fn test_missing_sections_case_insensitive() {
        assert_eq!(
            missing_sections("SUMMARY ... EXPERIENCE"),
            vec!["skills".to_string(), "education".to_string()]
        );
    }

    #[test]
    fn test_format_section_list() {
        assert_eq!(format_section_list(&[]), "");
        assert_eq!(
            format_section_list(&["education".to_string()]),
            "Education"
        );
    }
}
