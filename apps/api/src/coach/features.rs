//! Static metadata describing what the coach offers, served by `GET /features`.

use serde::Serialize;

use crate::coach::requests::CoachingMode;

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub id: CoachingMode,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCatalog {
    pub features: &'static [Feature],
    pub coaching_modes: &'static [ModeInfo],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "chat",
        name: "AI Career Chat",
        description: "Conversational coaching in general, interview, resume or learning-path mode.",
        endpoint: "/api/v1/ai-career-coach/chat",
        method: "POST",
    },
    Feature {
        id: "mock_interview",
        name: "Mock Interview",
        description: "Role-specific interview questions with tips and expected points.",
        endpoint: "/api/v1/ai-career-coach/mock-interview",
        method: "POST",
    },
    Feature {
        id: "resume_analysis",
        name: "Resume Analysis",
        description: "Scores a resume for impact, structure and keyword fit with a target role.",
        endpoint: "/api/v1/ai-career-coach/analyze-resume",
        method: "POST",
    },
    Feature {
        id: "learning_path",
        name: "Learning Path",
        description: "A phased plan to close the skill gap to a target role.",
        endpoint: "/api/v1/ai-career-coach/learning-path",
        method: "POST",
    },
    Feature {
        id: "career_analysis",
        name: "Career Assessment",
        description: "Career recommendations from interests, skills and goals.",
        endpoint: "/api/v1/ai-career-coach/analyze",
        method: "POST",
    },
    Feature {
        id: "roadmap",
        name: "Career Roadmap",
        description: "Milestone roadmap toward a role, built from curated career paths.",
        endpoint: "/api/v1/ai-career-coach/roadmap",
        method: "POST",
    },
];

pub const COACHING_MODES: &[ModeInfo] = &[
    ModeInfo {
        id: CoachingMode::General,
        name: "General Guidance",
        description: "Open-ended career questions.",
    },
    ModeInfo {
        id: CoachingMode::Interview,
        name: "Interview Prep",
        description: "Answer structure, common questions and follow-ups.",
    },
    ModeInfo {
        id: CoachingMode::Resume,
        name: "Resume Review",
        description: "Impact statements, structure and keywords.",
    },
    ModeInfo {
        id: CoachingMode::LearningPath,
        name: "Learning Path",
        description: "What to learn next and in which order.",
    },
];

pub fn feature_catalog() -> FeatureCatalog {
    FeatureCatalog {
        features: FEATURES,
        coaching_modes: COACHING_MODES,
    }
}
