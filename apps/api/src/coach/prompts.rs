// LLM prompt constants for the coach endpoints.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::Value;

use crate::coach::requests::{
    AssessmentRequest, ChatRequest, CoachingMode, LearningPathRequest, MockInterviewRequest,
    ResumeAnalysisRequest, RoadmapRequest,
};
use crate::llm_client::prompts::{structured_system, COACH_PERSONA};
use crate::llm_client::PromptContext;

const NOT_SPECIFIED: &str = "not specified";

// ────────────────────────────────────────────────────────────────────────────
// Chat
// ────────────────────────────────────────────────────────────────────────────

fn mode_focus(mode: CoachingMode) -> &'static str {
    match mode {
        CoachingMode::General => "Give broad career guidance.",
        CoachingMode::Interview => {
            "Focus on interview preparation: answer structure, common questions and follow-ups."
        }
        CoachingMode::Resume => {
            "Focus on resume writing: impact statements, structure and keyword alignment."
        }
        CoachingMode::LearningPath => {
            "Focus on skill development: what to learn, in which order and with which resources."
        }
    }
}

/// Replace: {persona}, {mode}, {focus}, {profile}
const CHAT_SYSTEM_TEMPLATE: &str = "{persona}\n\nCoaching mode: {mode}\n{focus}\n\
    Answer in plain prose, at most three short paragraphs, no JSON.\n\n\
    User profile (may be empty): {profile}";

pub fn chat_prompt(request: &ChatRequest) -> (String, PromptContext) {
    let profile = request
        .user_profile
        .as_ref()
        .map(Value::to_string)
        .unwrap_or_else(|| "{}".to_string());
    let system = CHAT_SYSTEM_TEMPLATE
        .replace("{persona}", COACH_PERSONA)
        .replace("{mode}", request.mode.as_str())
        .replace("{focus}", mode_focus(request.mode))
        .replace("{profile}", &profile);
    let context = PromptContext::system(system).with_history(request.conversation_history.clone());
    (request.message.trim().to_string(), context)
}

// ────────────────────────────────────────────────────────────────────────────
// Mock interview
// ────────────────────────────────────────────────────────────────────────────

const INTERVIEW_SYSTEM: &str = "You design realistic job interviews tailored to the role, \
    the candidate's experience and the requested difficulty.";

/// Replace: {count}, {role}, {experience}, {interview_type}, {difficulty}
const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Create {count} {interview_type} interview questions for a {role} candidate with {experience} of experience, at {difficulty} difficulty.

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "id": 1,
      "question": "Describe a time you improved a slow process.",
      "type": "behavioral",
      "difficulty": "intermediate",
      "tips": ["Use the STAR method"],
      "expectedPoints": ["Context", "Action taken", "Measured result"]
    }
  ]
}

"type" must be one of "technical", "behavioral", "system_design".
Return exactly {count} questions."#;

pub fn interview_prompt(request: &MockInterviewRequest) -> (String, PromptContext) {
    let prompt = INTERVIEW_PROMPT_TEMPLATE
        .replace("{count}", &request.question_count().to_string())
        .replace("{interview_type}", &request.interview_type.as_str().replace('_', " "))
        .replace("{role}", request.role.trim())
        .replace("{experience}", request.experience.trim())
        .replace("{difficulty}", request.difficulty.as_str());
    (prompt, PromptContext::system(structured_system(INTERVIEW_SYSTEM)))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume analysis
// ────────────────────────────────────────────────────────────────────────────

const RESUME_SYSTEM: &str = "You review resumes the way an experienced recruiter and an \
    applicant tracking system would. Be candid and specific.";

/// Replace: {target_role}, {job_description}, {resume_text}
const RESUME_PROMPT_TEMPLATE: &str = r#"Analyze the resume below for the target role "{target_role}".

Return a JSON object with this EXACT schema:
{
  "overallScore": 72,
  "atsScore": 65,
  "strengths": ["Clear project descriptions"],
  "improvements": ["Quantify results in the experience section"],
  "keywords": {"present": ["SQL"], "missing": ["Tableau"]},
  "sectionFeedback": [{"section": "experience", "score": 70, "feedback": "..."}],
  "summary": "One or two sentences."
}

All scores are integers from 0 to 100.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}"#;

pub fn resume_prompt(request: &ResumeAnalysisRequest) -> (String, PromptContext) {
    let prompt = RESUME_PROMPT_TEMPLATE
        .replace("{target_role}", or_unspecified(request.target_role.as_deref()))
        .replace("{job_description}", or_unspecified(request.job_description.as_deref()))
        .replace("{resume_text}", &request.resume_text);
    (prompt, PromptContext::system(structured_system(RESUME_SYSTEM)))
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmaps and learning paths
// ────────────────────────────────────────────────────────────────────────────

const ROADMAP_SYSTEM: &str = "You plan realistic, phased career roadmaps with concrete \
    skills, courses, projects and milestones for each phase.";

const PHASE_SCHEMA: &str = r#"{
      "phase": 1,
      "title": "Foundation",
      "duration": "0-3 months",
      "description": "...",
      "skills": ["..."],
      "courses": ["..."],
      "projects": ["..."],
      "resources": ["..."],
      "milestones": ["..."]
    }"#;

/// Replace: {role}, {level}, {timeframe}, {phase}
const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a career roadmap to become a {role}. Current level: {level}. Desired timeframe: {timeframe}.

Return a JSON object with this EXACT schema:
{
  "role": "{role}",
  "overview": "...",
  "totalDuration": "12 months",
  "phases": [
    {phase}
  ]
}

Use 3 to 5 phases, in order."#;

pub fn roadmap_prompt(request: &RoadmapRequest) -> (String, PromptContext) {
    let prompt = ROADMAP_PROMPT_TEMPLATE
        .replace("{role}", request.role.trim())
        .replace(
            "{level}",
            request.current_level.map(|l| l.as_str()).unwrap_or(NOT_SPECIFIED),
        )
        .replace("{timeframe}", or_unspecified(request.timeframe.as_deref()))
        .replace("{phase}", PHASE_SCHEMA);
    (prompt, PromptContext::system(structured_system(ROADMAP_SYSTEM)))
}

/// Replace: {skills}, {role}, {timeframe}, {style}, {hours}, {phase}
const LEARNING_PATH_PROMPT_TEMPLATE: &str = r#"Build a personalised learning path toward the role "{role}".
Skills already known: {skills}
Timeframe: {timeframe}
Learning style: {style}
Available time: {hours} hours per week

Skip what the learner already knows. Return a JSON object with this EXACT schema:
{
  "targetRole": "{role}",
  "skillGaps": ["..."],
  "totalDuration": "6 months",
  "weeklyCommitment": "{hours} hours per week",
  "phases": [
    {phase}
  ]
}"#;

pub fn learning_path_prompt(request: &LearningPathRequest) -> (String, PromptContext) {
    let hours = request.hours_per_week();
    let style = request
        .learning_style
        .map(|s| s.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let prompt = LEARNING_PATH_PROMPT_TEMPLATE
        .replace("{role}", request.target_role.trim())
        .replace("{skills}", &request.current_skills.join(", "))
        .replace("{timeframe}", or_unspecified(request.timeframe.as_deref()))
        .replace("{style}", style)
        .replace("{hours}", &hours.to_string())
        .replace("{phase}", PHASE_SCHEMA);
    (prompt, PromptContext::system(structured_system(ROADMAP_SYSTEM)))
}

// ────────────────────────────────────────────────────────────────────────────
// Career assessment
// ────────────────────────────────────────────────────────────────────────────

const ASSESSMENT_SYSTEM: &str = "You match people to careers based on their interests, \
    skills, experience and goals. Recommend at most three careers.";

/// Replace: {interests}, {skills}, {level}, {goals}, {work_style}
const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Recommend careers for this person.
Interests: {interests}
Skills: {skills}
Experience level: {level}
Goals: {goals}
Preferred work style: {work_style}

Return a JSON object with this EXACT schema (snake_case keys):
{
  "recommendations": [
    {
      "title": "Data Analyst",
      "description": "...",
      "match_percentage": 88,
      "salary_range": "$60,000 - $95,000",
      "growth_outlook": "...",
      "key_skills": ["SQL"],
      "daily_tasks": ["..."],
      "learning_path": ["..."],
      "time_to_proficiency": "6-12 months",
      "difficulty_level": "intermediate",
      "industry_demand": "High",
      "reasons": ["..."]
    }
  ],
  "summary": "..."
}

match_percentage is an integer from 0 to 100."#;

pub fn assessment_prompt(request: &AssessmentRequest) -> (String, PromptContext) {
    let skills = if request.skills.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        request.skills.join(", ")
    };
    let prompt = ASSESSMENT_PROMPT_TEMPLATE
        .replace("{interests}", request.interests.trim())
        .replace("{skills}", &skills)
        .replace(
            "{level}",
            request.experience_level.map(|l| l.as_str()).unwrap_or(NOT_SPECIFIED),
        )
        .replace("{goals}", or_unspecified(request.goals.as_deref()))
        .replace("{work_style}", or_unspecified(request.work_style.as_deref()));
    (prompt, PromptContext::system(structured_system(ASSESSMENT_SYSTEM)))
}

fn or_unspecified(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}
