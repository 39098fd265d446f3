//! Job matching — scores a resume against a job description.
//!
//! Primary path asks the completion service for a structured match
//! report; the fallback is pure set arithmetic over the regex skill
//! vocabulary. `match_job` and `generate_recommendations` never error.

pub mod prompts;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::llm_client::{
    extract_json_array, extract_json_object, CompletionRequest, CompletionService,
    ANALYSIS_MODEL, GENERATION_MODEL,
};
use crate::matching::prompts::{
    MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM, RECOMMENDATIONS_PROMPT_TEMPLATE, RECOMMENDATIONS_SYSTEM,
};
use crate::skills::{extract_job_skills, extract_skills};

const MATCH_MAX_TOKENS: u32 = 1500;
const MATCH_TEMPERATURE: f32 = 0.2;
const RECOMMENDATIONS_MAX_TOKENS: u32 = 600;
const RECOMMENDATIONS_TEMPERATURE: f32 = 0.7;

/// How much of each text is embedded in the recommendations prompt.
const PROMPT_TEXT_BUDGET: usize = 1000;
/// Recommendations are always exactly this many entries.
const RECOMMENDATION_COUNT: usize = 5;
/// At most this many missing skills are named in the fallback.
const MISSING_SKILLS_NAMED: usize = 3;

// Fallback recommendation tiers, keyed by match percentage.
pub const TIER_UNDER_30: &str = "Your skills don't align well with this position. Consider applying to roles that better match your experience.";
pub const TIER_UNDER_60: &str = "You have some relevant skills, but consider highlighting transferable skills and gaining experience in missing areas.";
pub const TIER_UNDER_80: &str =
    "Good skill alignment! Focus on showcasing your most relevant experiences and achievements.";
pub const TIER_80_PLUS: &str =
    "Excellent skill match! Your background aligns well with this position.";

const GENERIC_ADVICE: &[&str] = &[
    "Tailor your resume to highlight experiences relevant to the job requirements",
    "Include quantifiable achievements that demonstrate your impact",
    "Ensure your resume is ATS-friendly with clear formatting and keywords",
];

/// A required skill the resume lacks, with remediation advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkillGap {
    pub skill: String,
    pub importance: String,
    pub suggestion: String,
}

/// A resume skill that transfers to the role despite not being required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransferableSkill {
    pub skill: String,
    pub relevance: String,
    pub application: String,
}

/// Full match report. Every field defaults to its zero-value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobMatchResult {
    pub match_percentage: f64,
    pub matching_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub extra_skills: BTreeSet<String>,
    pub total_resume_skills: usize,
    pub total_job_skills: usize,
    pub matching_count: usize,
    pub ai_analysis: Map<String, Value>,
    pub skill_gaps: Vec<SkillGap>,
    pub transferable_skills: Vec<TransferableSkill>,
}

/// AI match report as returned by the completion service. `Option` fields
/// distinguish "absent" (recompute from regex sets) from "present".
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AiMatchReport {
    match_percentage: Option<f64>,
    matching_skills: Option<BTreeSet<String>>,
    missing_skills: Option<BTreeSet<String>>,
    extra_skills: Option<BTreeSet<String>>,
    ai_analysis: Map<String, Value>,
    skill_gaps: Vec<SkillGap>,
    transferable_skills: Vec<TransferableSkill>,
}

/// Matches a resume against a job description. AI-provided fields win;
/// anything absent is recomputed from the deterministic skill sets.
pub async fn match_job(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> JobMatchResult {
    let request = CompletionRequest {
        model: ANALYSIS_MODEL,
        system: MATCH_SYSTEM,
        prompt: MATCH_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{job_description}", job_description),
        max_tokens: MATCH_MAX_TOKENS,
        temperature: MATCH_TEMPERATURE,
    };

    let ai_report = match llm.complete(&request).await {
        Ok(response) => match parse_match_report(&response) {
            Some(report) => report,
            None => {
                warn!("job matching returned unusable JSON, falling back to regex");
                return fallback_match(resume_text, job_description);
            }
        },
        Err(e) => {
            warn!("job matching completion failed, falling back to regex: {e}");
            return fallback_match(resume_text, job_description);
        }
    };

    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_job_skills(job_description);

    let matching_skills = ai_report
        .matching_skills
        .unwrap_or_else(|| resume_skills.intersection(&job_skills).cloned().collect());
    let missing_skills = ai_report
        .missing_skills
        .unwrap_or_else(|| job_skills.difference(&resume_skills).cloned().collect());
    let extra_skills = ai_report
        .extra_skills
        .unwrap_or_else(|| resume_skills.difference(&job_skills).cloned().collect());
    let match_percentage = ai_report
        .match_percentage
        .unwrap_or_else(|| percentage(matching_skills.len(), job_skills.len()));

    JobMatchResult {
        match_percentage: round2(match_percentage),
        matching_count: matching_skills.len(),
        matching_skills,
        missing_skills,
        extra_skills,
        total_resume_skills: resume_skills.len(),
        total_job_skills: job_skills.len(),
        ai_analysis: ai_report.ai_analysis,
        skill_gaps: ai_report.skill_gaps,
        transferable_skills: ai_report.transferable_skills,
    }
}

/// Pure regex match: set intersection/difference over the vocabulary.
pub fn fallback_match(resume_text: &str, job_description: &str) -> JobMatchResult {
    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_job_skills(job_description);

    let matching_skills: BTreeSet<String> =
        resume_skills.intersection(&job_skills).cloned().collect();
    let missing_skills: BTreeSet<String> =
        job_skills.difference(&resume_skills).cloned().collect();
    let extra_skills: BTreeSet<String> =
        resume_skills.difference(&job_skills).cloned().collect();

    JobMatchResult {
        match_percentage: round2(percentage(matching_skills.len(), job_skills.len())),
        matching_count: matching_skills.len(),
        matching_skills,
        missing_skills,
        extra_skills,
        total_resume_skills: resume_skills.len(),
        total_job_skills: job_skills.len(),
        ai_analysis: Map::new(),
        skill_gaps: Vec::new(),
        transferable_skills: Vec::new(),
    }
}

/// Generates exactly five recommendations. AI path requests a JSON array;
/// any failure drops to the tiered fallback.
pub async fn generate_recommendations(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> Vec<String> {
    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_job_skills(job_description);

    let skills_csv = |skills: &BTreeSet<String>| skills.iter().cloned().collect::<Vec<_>>().join(", ");

    let request = CompletionRequest {
        model: GENERATION_MODEL,
        system: RECOMMENDATIONS_SYSTEM,
        prompt: RECOMMENDATIONS_PROMPT_TEMPLATE
            .replace("{resume_text}", truncate_chars(resume_text, PROMPT_TEXT_BUDGET))
            .replace(
                "{job_description}",
                truncate_chars(job_description, PROMPT_TEXT_BUDGET),
            )
            .replace("{resume_skills}", &skills_csv(&resume_skills))
            .replace("{job_skills}", &skills_csv(&job_skills)),
        max_tokens: RECOMMENDATIONS_MAX_TOKENS,
        temperature: RECOMMENDATIONS_TEMPERATURE,
    };

    let mut recommendations = match llm.complete(&request).await {
        Ok(response) => parse_recommendations(&response),
        Err(e) => {
            warn!("recommendations completion failed, falling back: {e}");
            Vec::new()
        }
    };

    if recommendations.is_empty() {
        recommendations = fallback_recommendations(&resume_skills, &job_skills);
    }

    recommendations.truncate(RECOMMENDATION_COUNT);
    recommendations
}

/// Tier table keyed by match percentage, plus up to three named missing
/// skills, topped up with generic advice to exactly five entries.
pub fn fallback_recommendations(
    resume_skills: &BTreeSet<String>,
    job_skills: &BTreeSet<String>,
) -> Vec<String> {
    let matching_count = resume_skills.intersection(job_skills).count();
    let match_percentage = percentage(matching_count, job_skills.len());

    let tier = if match_percentage < 30.0 {
        TIER_UNDER_30
    } else if match_percentage < 60.0 {
        TIER_UNDER_60
    } else if match_percentage < 80.0 {
        TIER_UNDER_80
    } else {
        TIER_80_PLUS
    };

    let mut recommendations = vec![tier.to_string()];

    let missing: Vec<&str> = job_skills
        .difference(resume_skills)
        .take(MISSING_SKILLS_NAMED)
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        recommendations.push(format!(
            "Consider gaining experience in: {}",
            missing.join(", ")
        ));
    }

    recommendations.extend(GENERIC_ADVICE.iter().map(|s| s.to_string()));
    recommendations.truncate(RECOMMENDATION_COUNT);
    recommendations
}

fn parse_match_report(response: &str) -> Option<AiMatchReport> {
    let json = extract_json_object(response)?;
    serde_json::from_str(json).ok()
}

fn parse_recommendations(response: &str) -> Vec<String> {
    let Some(json) = extract_json_array(response) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<Value>>(json)
        .map(|values| {
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// |matching| / |required| × 100; zero when the job-skill set is empty.
fn percentage(matching: usize, required: usize) -> f64 {
    if required == 0 {
        0.0
    } else {
        matching as f64 / required as f64 * 100.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Char-boundary-safe prefix of at most `max` bytes.
fn truncate_chars(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
