//! Axum route handlers for the content-generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::advice::{
    career_advice, generate_optimized_resume, interview_preparation, job_description_analysis,
    optimization_tips, resume_suggestions, InterviewPrepRequest, JobDescriptionRequest,
    OptimizationRequest, RewriteRequest, SuggestionRequest,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub section_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JdAnalysisResponse {
    pub analysis: String,
    pub job_title: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizationTipsResponse {
    pub optimization_tips: String,
    pub target_role: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewPrepResponse {
    pub interview_preparation: String,
    pub job_title: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CareerAdviceResponse {
    pub career_advice: String,
    pub job_title: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub optimized_content: String,
    pub section_type: &'static str,
    pub job_title: String,
    pub message: String,
}

/// POST /api/resume-suggestions
pub async fn handle_resume_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let suggestions = resume_suggestions(state.llm.as_ref(), &request).await?;
    Ok(Json(SuggestionsResponse {
        suggestions,
        section_id: request.section_id,
        message: "Expert AI recommendations generated successfully".to_string(),
    }))
}

/// POST /api/job-description-analysis
pub async fn handle_job_description_analysis(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JdAnalysisResponse>, AppError> {
    let analysis = job_description_analysis(state.llm.as_ref(), &request).await?;
    Ok(Json(JdAnalysisResponse {
        analysis,
        job_title: request.job_title,
        company: request.company,
        message: "Job description analysis completed".to_string(),
    }))
}

/// POST /api/resume-optimization-tips
pub async fn handle_optimization_tips(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> Result<Json<OptimizationTipsResponse>, AppError> {
    let tips = optimization_tips(state.llm.as_ref(), &request).await?;
    Ok(Json(OptimizationTipsResponse {
        optimization_tips: tips,
        target_role: request.target_role,
        message: "Resume optimization tips generated".to_string(),
    }))
}

/// POST /api/interview-preparation
pub async fn handle_interview_preparation(
    State(state): State<AppState>,
    Json(request): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrepResponse>, AppError> {
    let guide = interview_preparation(state.llm.as_ref(), &request).await?;
    Ok(Json(InterviewPrepResponse {
        interview_preparation: guide,
        job_title: request.job_title,
        company: request.company,
        message: "Interview preparation guide generated".to_string(),
    }))
}

/// POST /api/career-advice
pub async fn handle_career_advice(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<CareerAdviceResponse>, AppError> {
    let advice = career_advice(state.llm.as_ref(), &request).await?;
    Ok(Json(CareerAdviceResponse {
        career_advice: advice,
        job_title: request.job_title,
        company: request.company,
        message: "Career advice generated".to_string(),
    }))
}

/// POST /api/generate-optimized-resume
pub async fn handle_generate_optimized_resume(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let optimized_content = generate_optimized_resume(state.llm.as_ref(), &request).await?;
    Ok(Json(RewriteResponse {
        optimized_content,
        section_type: request.section_type.as_str(),
        job_title: request.job_title,
        message: "AI-optimized resume content generated successfully".to_string(),
    }))
}
