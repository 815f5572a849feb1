//! Request bodies for the coach endpoints and the schemas they are validated against.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coach::validation::{FieldSpec, Rule, Validated};
use crate::llm_client::ConversationTurn;

const COACHING_MODES: &[&str] = &["general", "interview", "resume", "learning_path"];
const INTERVIEW_TYPES: &[&str] = &["technical", "behavioral", "system_design", "mixed"];
const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];
const LEARNING_STYLES: &[&str] = &["visual", "hands_on", "reading", "mixed"];
const TURN_ROLES: &[&str] = &["user", "assistant"];

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const DEFAULT_HOURS_PER_WEEK: u32 = 10;

/// Selects the prompt template and fallback reply used by `/chat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingMode {
    #[default]
    General,
    Interview,
    Resume,
    LearningPath,
}

impl CoachingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachingMode::General => "general",
            CoachingMode::Interview => "interview",
            CoachingMode::Resume => "resume",
            CoachingMode::LearningPath => "learning_path",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Technical,
    Behavioral,
    SystemDesign,
    Mixed,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::SystemDesign => "system_design",
            InterviewType::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    HandsOn,
    Reading,
    Mixed,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::HandsOn => "hands_on",
            LearningStyle::Reading => "reading",
            LearningStyle::Mixed => "mixed",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// POST /chat
// ────────────────────────────────────────────────────────────────────────────

/// Shape of each `conversationHistory` entry.
const TURN_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "role",
        rules: &[Rule::Required, Rule::OneOf(TURN_ROLES)],
    },
    FieldSpec {
        name: "content",
        rules: &[Rule::Required, Rule::MinLength(1)],
    },
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub mode: CoachingMode,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    pub user_profile: Option<Value>,
}

impl Validated for ChatRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "message",
            rules: &[Rule::Required, Rule::MinLength(1), Rule::MaxLength(4000)],
        },
        FieldSpec {
            name: "mode",
            rules: &[Rule::OneOf(COACHING_MODES)],
        },
        FieldSpec {
            name: "conversationHistory",
            rules: &[Rule::Array, Rule::Items(TURN_SCHEMA)],
        },
        FieldSpec {
            name: "userProfile",
            rules: &[Rule::Object],
        },
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// POST /mock-interview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewRequest {
    pub role: String,
    pub experience: String,
    pub interview_type: InterviewType,
    pub difficulty: Difficulty,
    pub question_count: Option<u32>,
}

impl MockInterviewRequest {
    pub fn question_count(&self) -> usize {
        self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT) as usize
    }
}

impl Validated for MockInterviewRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "role",
            rules: &[Rule::Required, Rule::MinLength(2)],
        },
        FieldSpec {
            name: "experience",
            rules: &[Rule::Required, Rule::MinLength(1)],
        },
        FieldSpec {
            name: "interviewType",
            rules: &[Rule::Required, Rule::OneOf(INTERVIEW_TYPES)],
        },
        FieldSpec {
            name: "difficulty",
            rules: &[Rule::Required, Rule::OneOf(DIFFICULTIES)],
        },
        FieldSpec {
            name: "questionCount",
            rules: &[Rule::Range(1, 15)],
        },
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// POST /analyze-resume
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
    pub target_role: Option<String>,
    pub job_description: Option<String>,
}

impl Validated for ResumeAnalysisRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "resumeText",
            rules: &[Rule::Required, Rule::MinLength(50), Rule::MaxLength(50_000)],
        },
        FieldSpec {
            name: "targetRole",
            rules: &[Rule::MaxLength(200)],
        },
        FieldSpec {
            name: "jobDescription",
            rules: &[Rule::MaxLength(20_000)],
        },
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// POST /learning-path
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
    pub timeframe: Option<String>,
    pub learning_style: Option<LearningStyle>,
    pub hours_per_week: Option<u32>,
}

impl LearningPathRequest {
    pub fn hours_per_week(&self) -> u32 {
        self.hours_per_week.unwrap_or(DEFAULT_HOURS_PER_WEEK)
    }
}

impl Validated for LearningPathRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "currentSkills",
            rules: &[Rule::Required, Rule::MinItems(1), Rule::StringItems],
        },
        FieldSpec {
            name: "targetRole",
            rules: &[Rule::Required, Rule::MinLength(2)],
        },
        FieldSpec {
            name: "timeframe",
            rules: &[Rule::MaxLength(100)],
        },
        FieldSpec {
            name: "learningStyle",
            rules: &[Rule::OneOf(LEARNING_STYLES)],
        },
        FieldSpec {
            name: "hoursPerWeek",
            rules: &[Rule::Range(1, 80)],
        },
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// POST /analyze
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub interests: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_level: Option<Difficulty>,
    pub goals: Option<String>,
    pub work_style: Option<String>,
}

impl AssessmentRequest {
    /// Everything the user wrote, joined for keyword matching.
    pub fn free_text(&self) -> String {
        let mut parts = vec![self.interests.clone()];
        parts.extend(self.skills.iter().cloned());
        parts.extend(self.goals.iter().cloned());
        parts.extend(self.work_style.iter().cloned());
        parts.join(" ")
    }
}

impl Validated for AssessmentRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "interests",
            rules: &[Rule::Required, Rule::MinLength(3)],
        },
        FieldSpec {
            name: "skills",
            rules: &[Rule::StringItems],
        },
        FieldSpec {
            name: "experienceLevel",
            rules: &[Rule::OneOf(DIFFICULTIES)],
        },
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// POST /roadmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub role: String,
    pub current_level: Option<Difficulty>,
    pub timeframe: Option<String>,
}

impl Validated for RoadmapRequest {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "role",
            rules: &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(200)],
        },
        FieldSpec {
            name: "currentLevel",
            rules: &[Rule::OneOf(DIFFICULTIES)],
        },
        FieldSpec {
            name: "timeframe",
            rules: &[Rule::MaxLength(100)],
        },
    ];
}
