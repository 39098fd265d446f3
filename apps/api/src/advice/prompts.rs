// LLM prompt constants and templates for content generation.
//
// Every resume-rewrite template carries the same content policy: enhance
// wording only, never fabricate achievements, skills, dates, or
// credentials. The completion service is asked, not forced, to comply.

pub const SUGGESTIONS_SYSTEM: &str = "You are an expert resume writer and career coach with 15+ \
    years of experience helping executives and professionals land their dream jobs. Provide \
    specific, actionable, and industry-standard recommendations.";

/// Suggestions for the complete resume. Replace `{full_resume}`,
/// `{job_title}`, `{matching_skills}`, `{missing_skills}`.
pub const FULL_RESUME_SUGGESTIONS_TEMPLATE: &str = r#"As an expert resume writer and career coach, provide 7-10 specific, actionable suggestions for improving this complete resume to better match the job requirements.

COMPLETE RESUME:
{full_resume}

JOB CONTEXT:
- Job Title: {job_title}
- Matching Skills: {matching_skills}
- Missing Skills: {missing_skills}

REQUIREMENTS:
1. Analyze the complete resume structure and content
2. Focus on industry-specific improvements
3. Include ATS optimization strategies
4. Provide quantifiable achievement suggestions
5. Use executive-level language
6. Address specific skill gaps
7. Include leadership and strategic thinking elements
8. Provide specific action verbs and metrics
9. Consider overall resume flow and organization
10. Suggest improvements for each major section

Format each suggestion as a clear, actionable recommendation that a job seeker can immediately implement."#;

/// Suggestions for one section. Replace `{section_title}`,
/// `{original_content}`, `{job_title}`, `{matching_skills}`, `{missing_skills}`.
pub const SECTION_SUGGESTIONS_TEMPLATE: &str = r#"As an expert resume writer and career coach, provide 5-7 specific, actionable suggestions for improving the {section_title} section of a resume.

SECTION CONTENT:
{original_content}

CONTEXT:
- Job Title: {job_title}
- Matching Skills: {matching_skills}
- Missing Skills: {missing_skills}

REQUIREMENTS:
1. Focus on industry-specific improvements
2. Include ATS optimization strategies
3. Provide quantifiable achievement suggestions
4. Use executive-level language
5. Address specific skill gaps
6. Include leadership and strategic thinking elements
7. Provide specific action verbs and metrics

Format each suggestion as a clear, actionable recommendation that a job seeker can immediately implement."#;

pub const JD_ANALYSIS_SYSTEM: &str = "You are an expert career coach and job market analyst with \
    deep knowledge of various industries and hiring practices.";

/// Replace `{job_title}`, `{company}`, `{job_description}`.
pub const JD_ANALYSIS_TEMPLATE: &str = r#"As an expert career coach and job market analyst, provide a comprehensive analysis of this job posting:

Job Title: {job_title}
Company: {company}
Job Description: {job_description}

Provide analysis in the following areas:
1. Key Requirements Analysis - What are the most critical skills and qualifications?
2. Company Culture Insights - What does this posting reveal about the company culture?
3. Career Growth Potential - What opportunities for advancement does this role offer?
4. Salary Range Estimation - Based on the requirements, what's the likely salary range?
5. Application Strategy - What should a candidate emphasize in their application?
6. Red Flags or Concerns - Are there any warning signs in this posting?
7. Competitive Advantages - What would make a candidate stand out for this role?

Format as a structured analysis with clear sections and actionable insights."#;

pub const OPTIMIZATION_TIPS_SYSTEM: &str = "You are an expert resume writer and ATS specialist \
    with extensive experience helping candidates optimize their resumes for specific roles.";

/// Replace `{target_role}`, `{job_title}`, `{job_description}`.
pub const OPTIMIZATION_TIPS_TEMPLATE: &str = r#"As an expert resume writer and ATS specialist, provide comprehensive optimization tips for a resume targeting this specific role:

Target Role: {target_role}
Job Title: {job_title}
Job Description: {job_description}

Provide optimization tips in these categories:
1. ATS Optimization - Keywords and formatting for applicant tracking systems
2. Content Enhancement - How to improve the actual content and achievements
3. Structure Improvements - Better organization and flow
4. Industry-Specific Tips - Tailored advice for this field
5. Quantifiable Achievements - How to add measurable impact
6. Professional Summary - How to craft a compelling opening
7. Skills Section - How to organize and prioritize skills

Make each tip specific, actionable, and relevant to this particular job."#;

pub const INTERVIEW_PREP_SYSTEM: &str = "You are an expert interview coach and career consultant \
    with extensive experience preparing candidates for interviews across various industries.";

/// Replace `{job_title}`, `{company}`.
pub const INTERVIEW_PREP_TEMPLATE: &str = r#"As an expert interview coach and career consultant, provide comprehensive interview preparation guidance for this specific role:

Job Title: {job_title}
Company: {company}

Based on the resume analysis and job matching data, provide:
1. Key Talking Points - What achievements and experiences to emphasize
2. Potential Questions - Likely interview questions for this role
3. Skill Demonstrations - How to showcase relevant skills
4. Company Research - What to research about this company
5. Salary Negotiation - Tips for salary discussions
6. Follow-up Strategy - How to follow up after the interview
7. Common Pitfalls - What to avoid during the interview

Make all advice specific to this role and company."#;

pub const CAREER_ADVICE_SYSTEM: &str = "You are an expert career coach and industry consultant \
    with deep knowledge of various career paths and industry trends.";

/// Replace `{job_title}`, `{company}`, `{job_description}`.
pub const CAREER_ADVICE_TEMPLATE: &str = r#"As an expert career coach and industry consultant, provide personalized career advice for someone applying to this position:

Job Title: {job_title}
Company: {company}
Job Description: {job_description}

Provide advice in these areas:
1. Career Trajectory - How this role fits into long-term career goals
2. Skill Development - What skills to develop for this role
3. Industry Trends - Current trends in this field
4. Networking Opportunities - How to build relevant connections
5. Professional Development - Certifications or training to consider
6. Alternative Paths - Similar roles or career directions
7. Market Positioning - How to position yourself in this market

Make advice specific to this role and industry."#;

pub const REWRITE_SYSTEM: &str = "You are an expert resume writer who enhances existing content \
    without adding fake experience or achievements. Always work with what's real and only \
    improve the presentation.";

/// Replace `{original_resume}`, `{job_title}`, `{job_description}`,
/// `{matching_skills}`, `{missing_skills}`.
pub const REWRITE_FULL_RESUME_TEMPLATE: &str = r#"As an expert resume writer, optimize this resume for the specific job below.
IMPORTANT: Only enhance the existing content, do NOT add fake experience or achievements.

ORIGINAL RESUME:
{original_resume}

JOB TITLE: {job_title}
JOB DESCRIPTION: {job_description}
REQUIRED SKILLS: {matching_skills}
MISSING SKILLS: {missing_skills}

REQUIREMENTS:
1. Keep ALL existing information exactly as it is
2. Only enhance the language and presentation
3. Add relevant keywords naturally to existing content
4. Use professional language and power verbs
5. Do NOT add fake achievements, metrics, or experience
6. Do NOT add skills the person doesn't have
7. Maintain the same structure and format as the original
8. Only improve the wording of existing content
9. Use clear section headers like "PROFESSIONAL SUMMARY", "WORK EXPERIENCE", "SKILLS", "EDUCATION"
10. Make the resume more compelling for this specific job

Generate an optimized version of the resume that maintains the same structure but enhances the language and presentation for this specific job."#;

/// Replace `{original_resume}`, `{job_title}`, `{job_description}`, `{matching_skills}`.
pub const REWRITE_SUMMARY_TEMPLATE: &str = r#"As an expert resume writer, enhance the existing professional summary for this job.
IMPORTANT: Only improve the existing summary, do NOT create a new one with fake experience.
MAINTAIN THE SAME FORMAT AND STRUCTURE as the original.

EXISTING SUMMARY:
{original_resume}

JOB TITLE: {job_title}
JOB DESCRIPTION: {job_description}
REQUIRED SKILLS: {matching_skills}

REQUIREMENTS:
1. Keep the same experience level and background
2. Only enhance the language and presentation
3. Add relevant keywords naturally
4. Use professional language
5. Do NOT add fake years of experience or achievements
6. Only improve what's already there
7. MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE
8. Keep the same length and style

Generate an enhanced version that maintains the exact same format and structure."#;

/// Replace `{original_resume}`, `{job_title}`, `{job_description}`, `{matching_skills}`.
pub const REWRITE_EXPERIENCE_TEMPLATE: &str = r#"As an expert resume writer, enhance the existing experience descriptions for this job.
IMPORTANT: Only improve the existing experience, do NOT add fake achievements or metrics.
MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE as the original.

EXISTING EXPERIENCE:
{original_resume}

JOB TITLE: {job_title}
JOB DESCRIPTION: {job_description}
REQUIRED SKILLS: {matching_skills}

REQUIREMENTS:
1. Keep ALL existing achievements and responsibilities
2. Only enhance the language and presentation
3. Use power verbs for existing tasks
4. Add relevant keywords naturally to existing content
5. Do NOT add fake quantifiable metrics
6. Do NOT add fake responsibilities or achievements
7. Only improve the wording of what's already there
8. MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE
9. Keep the same company names, durations, and basic information
10. Only enhance the descriptions, not the structure

Generate enhanced descriptions that maintain the exact same format and structure."#;

/// Replace `{original_resume}`, `{job_title}`, `{matching_skills}`, `{missing_skills}`.
pub const REWRITE_SKILLS_TEMPLATE: &str = r#"As an expert resume writer, optimize the existing skills section for this job.
IMPORTANT: Only work with existing skills, do NOT add skills the person doesn't have.
MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE as the original.

EXISTING SKILLS:
{original_resume}

JOB TITLE: {job_title}
REQUIRED SKILLS: {matching_skills}
MISSING SKILLS: {missing_skills}

REQUIREMENTS:
1. Keep ALL existing skills exactly as they are
2. Only reorganize and present them better
3. Prioritize skills that match job requirements
4. Use industry-standard terminology for existing skills
5. Do NOT add skills the person doesn't have
6. Only improve the presentation of existing skills
7. MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE
8. Keep the same skills, just enhance the presentation

Generate an optimized presentation that maintains the exact same format and structure."#;

/// Replace `{original_resume}`, `{job_title}`, `{matching_skills}`.
pub const REWRITE_EDUCATION_TEMPLATE: &str = r#"As an expert resume writer, enhance the existing education section for this job.
IMPORTANT: Only improve the existing education, do NOT add fake degrees or achievements.
MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE as the original.

EXISTING EDUCATION:
{original_resume}

JOB TITLE: {job_title}
REQUIRED SKILLS: {matching_skills}

REQUIREMENTS:
1. Keep ALL existing education exactly as it is
2. Only enhance the language and presentation
3. Highlight relevant aspects of existing education
4. Use professional language
5. Do NOT add fake degrees, certifications, or achievements
6. Only improve the presentation of existing education
7. MAINTAIN THE EXACT SAME FORMAT AND STRUCTURE
8. Keep the same institution names, degrees, and basic information
9. Only enhance the descriptions, not the structure

Generate an enhanced presentation that maintains the exact same format and structure."#;
