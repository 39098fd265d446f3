//! Content generation — suggestion lists, job-posting analysis,
//! optimization tips, interview prep, career advice, and resume rewrites.
//!
//! Unlike analysis and matching, these operations have no deterministic
//! fallback: a completion failure surfaces to the caller as a 5xx.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, CompletionService, GENERATION_MODEL};

use prompts::*;

/// Section tag selecting a rewrite template. One table entry per tag,
/// not five duplicated branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    FullResume,
    Summary,
    Experience,
    Skills,
    Education,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::FullResume => "full_resume",
            SectionType::Summary => "summary",
            SectionType::Experience => "experience",
            SectionType::Skills => "skills",
            SectionType::Education => "education",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            SectionType::FullResume => REWRITE_FULL_RESUME_TEMPLATE,
            SectionType::Summary => REWRITE_SUMMARY_TEMPLATE,
            SectionType::Experience => REWRITE_EXPERIENCE_TEMPLATE,
            SectionType::Skills => REWRITE_SKILLS_TEMPLATE,
            SectionType::Education => REWRITE_EDUCATION_TEMPLATE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub section_id: String,
    pub section_title: String,
    pub original_content: String,
    pub job_title: String,
    pub job_description: String,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub full_resume: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizationRequest {
    pub resume_text: String,
    pub job_title: String,
    pub job_description: String,
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewPrepRequest {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub resume_analysis: serde_json::Value,
    #[serde(default)]
    pub job_matching: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub original_resume: String,
    pub job_title: String,
    pub job_description: String,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub section_type: SectionType,
}

async fn generate(
    llm: &dyn CompletionService,
    system: &'static str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    operation: &str,
) -> Result<String, AppError> {
    let request = CompletionRequest {
        model: GENERATION_MODEL,
        system,
        prompt,
        max_tokens,
        temperature,
    };
    llm.complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate {operation}: {e}")))
}

/// 5-10 improvement suggestions, one per line of the completion, bullet
/// markers stripped.
pub async fn resume_suggestions(
    llm: &dyn CompletionService,
    request: &SuggestionRequest,
) -> Result<Vec<String>, AppError> {
    let matching = request.matching_skills.join(", ");
    let missing = request.missing_skills.join(", ");

    let prompt = if request.section_id == "full-resume" {
        FULL_RESUME_SUGGESTIONS_TEMPLATE
            .replace("{full_resume}", &request.full_resume)
            .replace("{job_title}", &request.job_title)
            .replace("{matching_skills}", &matching)
            .replace("{missing_skills}", &missing)
    } else {
        SECTION_SUGGESTIONS_TEMPLATE
            .replace("{section_title}", &request.section_title)
            .replace("{original_content}", &request.original_content)
            .replace("{job_title}", &request.job_title)
            .replace("{matching_skills}", &matching)
            .replace("{missing_skills}", &missing)
    };

    let response = generate(llm, SUGGESTIONS_SYSTEM, prompt, 1000, 0.7, "AI suggestions").await?;
    Ok(clean_suggestion_lines(&response))
}

pub async fn job_description_analysis(
    llm: &dyn CompletionService,
    request: &JobDescriptionRequest,
) -> Result<String, AppError> {
    let prompt = JD_ANALYSIS_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{company}", &request.company)
        .replace("{job_description}", &request.job_description);
    generate(llm, JD_ANALYSIS_SYSTEM, prompt, 800, 0.6, "job description analysis").await
}

pub async fn optimization_tips(
    llm: &dyn CompletionService,
    request: &OptimizationRequest,
) -> Result<String, AppError> {
    let prompt = OPTIMIZATION_TIPS_TEMPLATE
        .replace("{target_role}", &request.target_role)
        .replace("{job_title}", &request.job_title)
        .replace("{job_description}", &request.job_description);
    generate(llm, OPTIMIZATION_TIPS_SYSTEM, prompt, 600, 0.7, "optimization tips").await
}

pub async fn interview_preparation(
    llm: &dyn CompletionService,
    request: &InterviewPrepRequest,
) -> Result<String, AppError> {
    let context = serde_json::json!({
        "resume_analysis": request.resume_analysis,
        "job_matching": request.job_matching,
    });
    let prompt = format!(
        "{}\n\nCANDIDATE DATA:\n{}",
        INTERVIEW_PREP_TEMPLATE
            .replace("{job_title}", &request.job_title)
            .replace("{company}", &request.company),
        context
    );
    generate(llm, INTERVIEW_PREP_SYSTEM, prompt, 700, 0.6, "interview preparation").await
}

pub async fn career_advice(
    llm: &dyn CompletionService,
    request: &JobDescriptionRequest,
) -> Result<String, AppError> {
    let prompt = CAREER_ADVICE_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{company}", &request.company)
        .replace("{job_description}", &request.job_description);
    generate(llm, CAREER_ADVICE_SYSTEM, prompt, 600, 0.7, "career advice").await
}

/// Rewrites one resume section (or the whole resume) via the template
/// table; the content policy in every template forbids fabrication.
pub async fn generate_optimized_resume(
    llm: &dyn CompletionService,
    request: &RewriteRequest,
) -> Result<String, AppError> {
    let prompt = request
        .section_type
        .template()
        .replace("{original_resume}", &request.original_resume)
        .replace("{job_title}", &request.job_title)
        .replace("{job_description}", &request.job_description)
        .replace("{matching_skills}", &request.matching_skills.join(", "))
        .replace("{missing_skills}", &request.missing_skills.join(", "));
    generate(llm, REWRITE_SYSTEM, prompt, 1500, 0.7, "optimized resume").await
}

/// Splits a completion into suggestion strings: one per non-empty line,
/// leading bullet markers removed.
fn clean_suggestion_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches("- ")
                .trim_start_matches("• ")
                .trim_start_matches("* ")
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct CannedCompletion(&'static str);

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl CompletionService for FailingCompletion {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "backend unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_section_type_deserializes_snake_case_tags() {
        let tags = [
            ("\"full_resume\"", SectionType::FullResume),
            ("\"summary\"", SectionType::Summary),
            ("\"experience\"", SectionType::Experience),
            ("\"skills\"", SectionType::Skills),
            ("\"education\"", SectionType::Education),
        ];
        for (json, expected) in tags {
            let parsed: SectionType = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_each_section_gets_a_distinct_template() {
        let sections = [
            SectionType::FullResume,
            SectionType::Summary,
            SectionType::Experience,
            SectionType::Skills,
            SectionType::Education,
        ];
        for (i, a) in sections.iter().enumerate() {
            for b in &sections[i + 1..] {
                assert_ne!(a.template(), b.template());
            }
        }
    }

    #[test]
    fn test_rewrite_templates_carry_content_policy() {
        for section in [
            SectionType::FullResume,
            SectionType::Summary,
            SectionType::Experience,
            SectionType::Skills,
            SectionType::Education,
        ] {
            assert!(section.template().contains("do NOT add fake")
                || section.template().contains("do NOT add skills"));
        }
    }

    #[test]
    fn test_clean_suggestion_lines_strips_bullets_and_blanks() {
        let response = "- First suggestion\n\n• Second suggestion\n* Third suggestion\n  Plain line  ";
        let cleaned = clean_suggestion_lines(response);
        assert_eq!(
            cleaned,
            vec![
                "First suggestion",
                "Second suggestion",
                "Third suggestion",
                "Plain line"
            ]
        );
    }

    #[tokio::test]
    async fn test_suggestions_split_per_line() {
        let canned = CannedCompletion("- Quantify your achievements\n- Add a skills matrix");
        let request = SuggestionRequest {
            section_id: "experience".to_string(),
            section_title: "Experience".to_string(),
            original_content: "Did things".to_string(),
            job_title: "Engineer".to_string(),
            job_description: "Build things".to_string(),
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["Docker".to_string()],
            full_resume: String::new(),
        };
        let suggestions = resume_suggestions(&canned, &request).await.unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], "Quantify your achievements");
    }

    #[tokio::test]
    async fn test_generation_failure_surfaces_llm_error() {
        let request = JobDescriptionRequest {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            job_description: "Build".to_string(),
        };
        let err = job_description_analysis(&FailingCompletion, &request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("backend unavailable"));
    }
}
