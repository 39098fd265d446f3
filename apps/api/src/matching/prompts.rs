// LLM prompt constants for job matching and recommendations.

/// System prompt for resume-to-job matching.
pub const MATCH_SYSTEM: &str = "You are an expert HR recruiter and career consultant with deep \
    knowledge of job market trends, skill requirements, and candidate evaluation. You provide \
    accurate skill matching and career guidance. You also provide exact suggestions that need \
    to be taken in the resume.";

/// Matching prompt template. Replace `{resume_text}` and `{job_description}`.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Please analyze the match between this resume and job description. Return your analysis in the following JSON format:

{
    "match_percentage": 75.5,
    "matching_skills": ["Python", "React", "SQL"],
    "missing_skills": ["Docker", "Kubernetes"],
    "extra_skills": ["MongoDB", "AWS"],
    "ai_analysis": {
        "overall_fit": "Good fit for the role with some skill gaps",
        "strength_areas": ["Technical skills", "Project management"],
        "concern_areas": ["DevOps experience", "Cloud platforms"],
        "role_alignment": "Candidate's background aligns well with the position"
    },
    "skill_gaps": [
        {
            "skill": "Docker",
            "importance": "High",
            "suggestion": "Consider taking Docker certification course"
        }
    ],
    "transferable_skills": [
        {
            "skill": "Project Management",
            "relevance": "Highly relevant for team leadership",
            "application": "Can be applied to technical project coordination"
        }
    ]
}

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

ANALYSIS REQUIREMENTS:
1. Calculate accurate match percentage (0-100) based on skill alignment
2. Identify ALL matching skills between resume and job requirements
3. List missing skills that are required for the job
4. Identify extra skills the candidate has beyond job requirements
5. Provide detailed AI analysis of overall fit
6. Identify specific skill gaps with importance levels and suggestions
7. Highlight transferable skills that could be valuable
8. Consider experience level, industry relevance, and career progression

Focus on being precise, actionable, and providing insights that help both the candidate and employer understand the match quality."#;

/// System prompt for recommendation generation.
pub const RECOMMENDATIONS_SYSTEM: &str = "You are an expert career coach and resume writer with \
    15+ years of experience helping professionals land their dream jobs. Provide specific, \
    actionable recommendations.";

/// Recommendations prompt template. Replace `{resume_text}`,
/// `{job_description}` (both pre-truncated), `{resume_skills}`, `{job_skills}`.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"As an expert career coach and resume writer, provide 5 specific, actionable recommendations for improving a resume to better match this job description.

RESUME TEXT:
{resume_text}...

JOB DESCRIPTION:
{job_description}...

RESUME SKILLS:
{resume_skills}

JOB SKILLS:
{job_skills}

REQUIREMENTS:
1. Be specific and actionable - avoid generic advice
2. Focus on the most impactful improvements first
3. Consider the candidate's current skill level
4. Provide concrete steps they can take
5. Address both immediate and long-term career development
6. Consider the specific job requirements
7. Include both resume improvements and skill development suggestions
8. Make recommendations that are realistic and achievable

Format your response as a JSON array of 5 recommendation strings:
[
    "Specific recommendation 1",
    "Specific recommendation 2",
    "Specific recommendation 3",
    "Specific recommendation 4",
    "Specific recommendation 5"
]"#;
