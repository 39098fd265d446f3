//! Skill extraction — pure, deterministic vocabulary scan over free text.
//!
//! This is both a standalone extractor and the fallback behind every
//! AI-backed operation: same text always yields the same set.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed vocabulary of recognized skills: languages, frameworks, cloud
/// platforms, tooling, and soft-skill phrases. Matches are reported in
/// this canonical casing regardless of how the text spells them.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages, frameworks, platforms
    "Python",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "TypeScript",
    "HTML",
    "CSS",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "Agile",
    "Scrum",
    "JIRA",
    "Jenkins",
    "CI/CD",
    "REST API",
    "GraphQL",
    "Microservices",
    "Machine Learning",
    "AI",
    "Data Science",
    "Tableau",
    "Power BI",
    "Excel",
    "Word",
    "PowerPoint",
    "Photoshop",
    "Illustrator",
    "Figma",
    "Sketch",
    // Disciplines and soft skills
    "Programming",
    "Development",
    "Coding",
    "Software",
    "Web",
    "Mobile",
    "Database",
    "Cloud",
    "DevOps",
    "Testing",
    "QA",
    "UI/UX",
    "Design",
    "Analytics",
    "Business Intelligence",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Critical Thinking",
    "Teamwork",
    "Collaboration",
];

/// One case-insensitive alternation over the whole vocabulary.
static SKILL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = SKILL_VOCABULARY
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("skill vocabulary pattern")
});

/// Lowercased match -> canonical vocabulary casing.
static CANONICAL: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|s| (s.to_lowercase(), *s))
        .collect()
});

/// Heading phrases that introduce explicitly-listed requirements in a
/// job description. Text following these gets a second, targeted scan.
static SECTION_HEADINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)required\s+skills?|qualifications|requirements|experience\s+with|proficient\s+in|familiar\s+with|expertise\s+in",
    )
    .expect("section heading pattern")
});

/// How much text after a requirements heading is scanned again.
const HEADING_WINDOW: usize = 400;

/// Returns the set of vocabulary skills present in `text`,
/// case-insensitive and deduplicated.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SKILL_PATTERN
        .find_iter(text)
        .filter_map(|m| CANONICAL.get(&m.as_str().to_lowercase()))
        .map(|s| s.to_string())
        .collect()
}

/// Job-description variant: the full-text scan unioned with scans of the
/// windows following requirement headings, biasing recall toward
/// explicitly-listed requirements.
pub fn extract_job_skills(job_description: &str) -> BTreeSet<String> {
    let mut skills = extract_skills(job_description);

    for heading in SECTION_HEADINGS.find_iter(job_description) {
        let start = heading.end();
        let mut end = (start + HEADING_WINDOW).min(job_description.len());
        while !job_description.is_char_boundary(end) {
            end -= 1;
        }
        skills.extend(extract_skills(&job_description[start..end]));
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_vocabulary_tokens_yields_empty_set() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert!(extract_skills(text).is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_skills("").is_empty());
        assert!(extract_job_skills("").is_empty());
    }

    #[test]
    fn test_case_insensitive_canonical_casing() {
        let skills = extract_skills("experienced in python, REACT and aws");
        assert!(skills.contains("Python"));
        assert!(skills.contains("React"));
        assert!(skills.contains("AWS"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = extract_skills("Python python PYTHON");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_word_boundaries_respected() {
        // "Javan" and "Gitarist" must not match "Java" / "Git"
        let skills = extract_skills("Javan Gitarist");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_multi_word_and_punctuated_tokens() {
        let skills = extract_skills("Built pipelines with CI/CD, Node.js and Machine Learning");
        assert!(skills.contains("CI/CD"));
        assert!(skills.contains("Node.js"));
        assert!(skills.contains("Machine Learning"));
    }

    #[test]
    fn test_javascript_not_shadowed_by_java() {
        let skills = extract_skills("JavaScript developer");
        assert!(skills.contains("JavaScript"));
        assert!(!skills.contains("Java"));
    }

    #[test]
    fn test_job_skills_pick_up_requirements_section() {
        let jd = "We build widgets.\nRequired skills: Docker, Kubernetes.\nNice people only.";
        let skills = extract_job_skills(jd);
        assert!(skills.contains("Docker"));
        assert!(skills.contains("Kubernetes"));
    }

    #[test]
    fn test_determinism() {
        let text = "Python, React, AWS, leadership and teamwork";
        assert_eq!(extract_skills(text), extract_skills(text));
        assert_eq!(extract_job_skills(text), extract_job_skills(text));
    }
}
