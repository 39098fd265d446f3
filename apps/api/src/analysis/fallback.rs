//! Regex-based resume analysis — the deterministic path taken whenever
//! the completion service fails or returns unusable output.
//!
//! Heuristics, not NLP: paragraph keywords locate experience/education
//! blocks, "at <Capitalized Words>" names companies and institutions,
//! `YYYY-YYYY`/`YYYY-present` spans become durations.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::{EducationEntry, ExperienceEntry, ResumeAnalysis};
use crate::skills::extract_skills;

static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bat\s+([A-Z][A-Za-z\s&]+)").expect("company pattern"));

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4}\s*[-–]\s*\d{4}|\d{4}\s*[-–]\s*present)").expect("duration pattern")
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Bachelor|Master|PhD|BSc|MSc|MBA|Associate|Diploma)\b")
        .expect("degree pattern")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9-]+").expect("linkedin pattern"));

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern"));

static ACHIEVEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:achieved|improved|increased|decreased)\b").expect("achievement pattern")
});

static TECH_SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:Python|Java|JavaScript|React|SQL)\b").expect("tech skill pattern")
});

/// Action verbs whose presence reads as a strength signal.
const POSITIVE_INDICATORS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "decreased",
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "optimized",
    "awarded",
    "recognized",
    "certified",
    "expert",
    "senior",
    "lead",
];

const MAX_STRENGTHS: usize = 5;
const SUMMARY_MAX_CHARS: usize = 200;

/// Builds a structurally complete `ResumeAnalysis` from regexes alone.
/// Pure and infallible: empty input yields zero-valued fields.
pub fn fallback_analysis(resume_text: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        skills: extract_skills(resume_text).into_iter().collect(),
        experience: extract_experience(resume_text),
        education: extract_education(resume_text),
        contact_info: extract_contact_info(resume_text),
        summary: generate_summary(resume_text),
        strengths: identify_strengths(resume_text),
        areas_for_improvement: identify_improvements(resume_text),
        ai_insights: Vec::new(),
        overall_score: 0,
    }
}

/// Paragraph blocks mentioning any of `keywords`, split on blank lines.
fn keyword_blocks<'a>(text: &'a str, keywords: &[&str]) -> Vec<&'a str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter(|block| {
            let lower = block.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .collect()
}

fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    keyword_blocks(text, &["experience", "work", "employment", "job"])
        .into_iter()
        .map(|block| ExperienceEntry {
            company: COMPANY_RE
                .captures(block)
                .map(|c| c[1].trim().to_string())
                .unwrap_or_else(|| "Unknown Company".to_string()),
            duration: DURATION_RE
                .find(block)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "Duration not specified".to_string()),
            description: block.to_string(),
        })
        .collect()
}

fn extract_education(text: &str) -> Vec<EducationEntry> {
    keyword_blocks(text, &["education", "degree", "university", "college", "school"])
        .into_iter()
        .map(|block| EducationEntry {
            degree: DEGREE_RE
                .captures(block)
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| "Degree not specified".to_string()),
            institution: COMPANY_RE
                .captures(block)
                .map(|c| c[1].trim().to_string())
                .unwrap_or_else(|| "Institution not specified".to_string()),
            description: block.to_string(),
        })
        .collect()
}

/// Email, phone, and LinkedIn URL. Absent fields are simply omitted from
/// the map; the map itself always exists.
pub fn extract_contact_info(text: &str) -> BTreeMap<String, String> {
    let mut contact = BTreeMap::new();

    if let Some(m) = EMAIL_RE.find(text) {
        contact.insert("email".to_string(), m.as_str().to_string());
    }
    if let Some(m) = PHONE_RE.find(text) {
        contact.insert("phone".to_string(), m.as_str().to_string());
    }
    if let Some(m) = LINKEDIN_RE.find(text) {
        contact.insert("linkedin".to_string(), m.as_str().to_string());
    }

    contact
}

/// First substantial line of the resume, truncated to 200 chars.
fn generate_summary(text: &str) -> String {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| line.len() > 20);

    match first {
        Some(line) if line.len() > SUMMARY_MAX_CHARS => {
            let mut end = SUMMARY_MAX_CHARS;
            while !line.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &line[..end])
        }
        Some(line) => line.to_string(),
        None => "Professional summary not found in resume.".to_string(),
    }
}

fn identify_strengths(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    POSITIVE_INDICATORS
        .iter()
        .filter(|indicator| {
            // Whole-word presence check against the lowercased text.
            lower
                .match_indices(*indicator)
                .any(|(i, _)| is_word_bounded(&lower, i, indicator.len()))
        })
        .take(MAX_STRENGTHS)
        .map(|indicator| format!("Demonstrates {indicator} experience"))
        .collect()
}

fn is_word_bounded(text: &str, start: usize, len: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[start + len..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
}

fn identify_improvements(text: &str) -> Vec<String> {
    let mut improvements = Vec::new();

    if text.len() < 500 {
        improvements.push("Resume appears too short - consider adding more details".to_string());
    }
    if !YEAR_RE.is_match(text) {
        improvements.push("Consider adding specific dates and durations".to_string());
    }
    if !ACHIEVEMENT_RE.is_match(text) {
        improvements.push("Consider adding quantifiable achievements".to_string());
    }
    if !TECH_SKILL_RE.is_match(text) {
        improvements.push("Consider highlighting technical skills more prominently".to_string());
    }

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "Jane Doe — Senior Software Engineer with a decade of shipping.\n\
        jane.doe@example.com | 555-123-4567 | linkedin.com/in/janedoe\n\n\
        Work experience: Led backend development at Acme Corp 2019-2023.\n\
        Improved API latency and managed a team of five engineers.\n\n\
        Education: Bachelor of Science at State University, 2015.\n\n\
        Skills: Python, React, AWS, Docker";

    #[test]
    fn test_contact_info_extraction() {
        let contact = extract_contact_info(SAMPLE_RESUME);
        assert_eq!(contact.get("email").unwrap(), "jane.doe@example.com");
        assert_eq!(contact.get("phone").unwrap(), "555-123-4567");
        assert_eq!(contact.get("linkedin").unwrap(), "linkedin.com/in/janedoe");
    }

    #[test]
    fn test_contact_info_empty_when_absent() {
        assert!(extract_contact_info("nothing to find here").is_empty());
    }

    #[test]
    fn test_experience_block_detected() {
        let analysis = fallback_analysis(SAMPLE_RESUME);
        assert!(!analysis.experience.is_empty());
        let entry = &analysis.experience[0];
        assert!(entry.company.starts_with("Acme Corp"));
        assert_eq!(entry.duration, "2019-2023");
    }

    #[test]
    fn test_education_block_detected() {
        let analysis = fallback_analysis(SAMPLE_RESUME);
        assert!(!analysis.education.is_empty());
        let entry = &analysis.education[0];
        assert_eq!(entry.degree, "Bachelor");
        assert!(entry.institution.starts_with("State University"));
    }

    #[test]
    fn test_strengths_capped_at_five() {
        let text = "achieved improved increased decreased led managed developed created";
        let strengths = identify_strengths(text);
        assert_eq!(strengths.len(), 5);
        assert_eq!(strengths[0], "Demonstrates achieved experience");
    }

    #[test]
    fn test_strengths_require_word_boundary() {
        // "unled" must not count as "led"
        assert!(identify_strengths("unled misled").is_empty());
    }

    #[test]
    fn test_improvements_for_sparse_resume() {
        let improvements = identify_improvements("short resume");
        assert!(improvements
            .iter()
            .any(|i| i.contains("too short")));
        assert!(improvements
            .iter()
            .any(|i| i.contains("dates and durations")));
    }

    #[test]
    fn test_summary_prefers_first_substantial_line() {
        let analysis = fallback_analysis(SAMPLE_RESUME);
        assert!(analysis.summary.starts_with("Jane Doe"));
    }

    #[test]
    fn test_summary_truncated_to_200_chars() {
        let long_line = "x".repeat(300);
        let analysis = fallback_analysis(&long_line);
        assert_eq!(analysis.summary.len(), 203); // 200 + "..."
    }

    #[test]
    fn test_empty_input_yields_zero_valued_struct() {
        let analysis = fallback_analysis("");
        assert!(analysis.skills.is_empty());
        assert!(analysis.experience.is_empty());
        assert!(analysis.education.is_empty());
        assert!(analysis.contact_info.is_empty());
        assert!(analysis.strengths.is_empty());
        assert!(analysis.ai_insights.is_empty());
        assert_eq!(analysis.overall_score, 0);
    }
}
