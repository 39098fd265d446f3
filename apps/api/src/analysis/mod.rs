//! Resume analysis — AI-primary with a deterministic regex fallback.
//!
//! `analyze_resume` never returns an error: any completion failure,
//! missing JSON, or parse failure drops to `fallback_analysis`, which is
//! pure and always produces a structurally complete result.

pub mod fallback;
pub mod prompts;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::fallback::{extract_contact_info, fallback_analysis};
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::llm_client::{
    extract_json_object, CompletionRequest, CompletionService, ANALYSIS_MODEL,
};

const ANALYSIS_MAX_TOKENS: u32 = 2000;
const ANALYSIS_TEMPERATURE: f32 = 0.3;
const MAX_SCORE: u32 = 100;

/// One work-history item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// One education item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub description: String,
}

/// Full analysis of one resume. Every field defaults to its zero-value,
/// so consumers never branch on missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub contact_info: BTreeMap<String, String>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub ai_insights: Vec<String>,
    pub overall_score: u32,
}

/// Analyzes resume text. Primary path asks the completion service for the
/// exact JSON schema and slices the object out of whatever prose it
/// returns; contact info always comes from the local regexes.
pub async fn analyze_resume(llm: &dyn CompletionService, resume_text: &str) -> ResumeAnalysis {
    let request = CompletionRequest {
        model: ANALYSIS_MODEL,
        system: ANALYSIS_SYSTEM,
        prompt: ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text),
        max_tokens: ANALYSIS_MAX_TOKENS,
        temperature: ANALYSIS_TEMPERATURE,
    };

    match llm.complete(&request).await {
        Ok(response) => match parse_analysis(&response) {
            Some(mut analysis) => {
                analysis.contact_info = extract_contact_info(resume_text);
                analysis.overall_score = analysis.overall_score.min(MAX_SCORE);
                analysis
            }
            None => {
                warn!("resume analysis returned unusable JSON, falling back to regex");
                fallback_analysis(resume_text)
            }
        },
        Err(e) => {
            warn!("resume analysis completion failed, falling back to regex: {e}");
            fallback_analysis(resume_text)
        }
    }
}

/// Brace-sliced, zero-value-defaulted parse of a completion response.
fn parse_analysis(response: &str) -> Option<ResumeAnalysis> {
    let json = extract_json_object(response)?;
    serde_json::from_str(json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FailingCompletion;

    #[async_trait]
    impl CompletionService for FailingCompletion {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    struct CannedCompletion(&'static str);

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    const RESUME: &str = "Led development at Acme Corp 2019-2023 using Python and React.\n\
        jane@example.com";

    #[tokio::test]
    async fn test_failing_completion_falls_back_without_error() {
        let analysis = analyze_resume(&FailingCompletion, RESUME).await;
        assert!(analysis.skills.contains(&"Python".to_string()));
        assert_eq!(analysis.overall_score, 0);
        assert!(analysis.ai_insights.is_empty());
        assert_eq!(analysis.contact_info.get("email").unwrap(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_chatty_completion_is_brace_sliced() {
        let canned = CannedCompletion(
            "Here is my analysis:\n{\"skills\": [\"Python\"], \"summary\": \"Strong\", \"overall_score\": 85}\nHope it helps!",
        );
        let analysis = analyze_resume(&canned, RESUME).await;
        assert_eq!(analysis.skills, vec!["Python".to_string()]);
        assert_eq!(analysis.summary, "Strong");
        assert_eq!(analysis.overall_score, 85);
        // Absent fields default to zero-values.
        assert!(analysis.experience.is_empty());
        assert!(analysis.strengths.is_empty());
        // Contact info always comes from regex extraction.
        assert_eq!(analysis.contact_info.get("email").unwrap(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_score_clamped_to_100() {
        let canned = CannedCompletion("{\"overall_score\": 900}");
        let analysis = analyze_resume(&canned, RESUME).await;
        assert_eq!(analysis.overall_score, 100);
    }

    #[tokio::test]
    async fn test_non_json_completion_falls_back() {
        let canned = CannedCompletion("I am sorry, I cannot help with that.");
        let analysis = analyze_resume(&canned, RESUME).await;
        // Fallback result: regex skills present, zero score.
        assert!(analysis.skills.contains(&"React".to_string()));
        assert_eq!(analysis.overall_score, 0);
    }

    #[test]
    fn test_zero_value_defaulting_round_trip_is_idempotent() {
        let first = fallback_analysis(RESUME);
        let json = serde_json::to_string(&first).unwrap();
        let second: ResumeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_object_parses_to_all_zero_values() {
        let analysis: ResumeAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis, ResumeAnalysis::default());
    }
}
