// LLM prompt constants for resume analysis.

/// System prompt for resume analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an expert resume analyst and career coach with 15+ \
    years of experience in HR and recruitment. You provide detailed, actionable feedback on \
    resumes. You also provide exact suggestions that need to be taken in the resume.";

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please analyze this resume comprehensively and provide detailed feedback. Return your analysis in the following JSON format:

{
    "skills": ["skill1", "skill2", "skill3"],
    "experience": [
        {
            "company": "Company Name",
            "duration": "2020-2023",
            "description": "Detailed role description"
        }
    ],
    "education": [
        {
            "degree": "Bachelor of Science",
            "institution": "University Name",
            "description": "Education details"
        }
    ],
    "summary": "Professional summary in 2-3 sentences",
    "strengths": [
        "Specific strength 1",
        "Specific strength 2",
        "Specific strength 3"
    ],
    "areas_for_improvement": [
        "Specific improvement area 1",
        "Specific improvement area 2"
    ],
    "ai_insights": [
        "Professional insight about the candidate",
        "Career trajectory analysis",
        "Market positioning assessment"
    ],
    "overall_score": 85
}

RESUME TEXT:
{resume_text}

ANALYSIS REQUIREMENTS:
1. Extract ALL technical and soft skills mentioned
2. Identify work experience with company names and durations
3. Extract education details with degrees and institutions
4. Create a compelling professional summary
5. Identify 3-5 specific strengths with examples
6. Provide 2-3 actionable improvement suggestions
7. Give 2-3 professional insights about the candidate
8. Score the resume from 0-100 based on:
   - Content quality and completeness
   - Achievement quantification
   - Skill relevance
   - Professional presentation
   - ATS optimization

Focus on being specific, actionable, and professional in your analysis."#;
