//! Fuzzy string scoring on a 0–100 scale.
//!
//! Both sides are normalized first (lowercase, punctuation other than `+#./-` turned into
//! spaces, whitespace collapsed) so `"React  JS"` and `"react js"` are identical. The score
//! is normalized Levenshtein similarity scaled to 100 and rounded.

/// Minimum score for a candidate to count as a skill match.
pub const MATCH_THRESHOLD: u8 = 80;

/// Hard cutoff: 79 rejects, 80 accepts.
pub fn accepts(score: u8) -> bool {
    score >= MATCH_THRESHOLD
}

pub fn normalize(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '/' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity of two strings in `0..=100`. Anything that normalizes to empty scores 0.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (strsim::normalized_levenshtein(&a, &b) * 100.0).round() as u8
}

/// Best-scoring choice for `candidate`; the first choice wins ties.
pub fn best_match<'a>(candidate: &str, choices: &'a [String]) -> Option<(&'a str, u8)> {
    let mut best: Option<(&'a str, u8)> = None;
    for choice in choices {
        let score = similarity(candidate, choice);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((choice.as_str(), score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!accepts(79));
        assert!(accepts(80));
        assert!(accepts(100));
    }

    #[test]
    fn test_threshold_boundary_on_real_scores() {
        // 3 substitutions over 14 chars → 0.7857 → 79
        let below = similarity("abcdefghijklmn", "abcdefghijkxyz");
        // 1 substitution over 5 chars → 0.8 → 80
        let at = similarity("abcde", "abcdx");
        assert_eq!(below, 79);
        assert_eq!(at, 80);
        assert!(!accepts(below));
        assert!(accepts(at));
    }

    #[test]
    fn test_normalize_keeps_skill_punctuation() {
        assert_eq!(normalize("  Node.js, C++ & C#!"), "node.js c++ c#");
        assert_eq!(normalize("UI/UX"), "ui/ux");
    }

    #[test]
    fn test_identical_after_normalization() {
        assert_eq!(similarity("React  JS", "react js"), 100);
    }

    #[test]
    fn test_close_spellings_score_high() {
        assert!(accepts(similarity("reactjs", "React JS")));
        assert!(accepts(similarity("communications", "Communication")));
        assert!(accepts(similarity("nodejs", "Node.js")));
    }

    #[test]
    fn test_distinct_skills_rejected() {
        assert!(!accepts(similarity("java", "JavaScript")));
        assert!(!accepts(similarity("sql", "MySQL")));
        assert!(!accepts(similarity("c", "C++")));
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(similarity("", "Python"), 0);
        assert_eq!(similarity("!!!", "Python"), 0);
    }

    #[test]
    fn test_best_match_picks_highest() {
        let skills = choices(&["Java", "JavaScript", "Python"]);
        assert_eq!(best_match("javascript", &skills), Some(("JavaScript", 100)));
    }

    #[test]
    fn test_best_match_first_wins_ties() {
        let skills = choices(&["Go", "Go"]);
        let (skill, _) = best_match("go", &skills).unwrap();
        assert!(std::ptr::eq(skill, skills[0].as_str()));
    }

    #[test]
    fn test_best_match_empty_choices() {
        assert_eq!(best_match("rust", &[]), None);
    }
}
