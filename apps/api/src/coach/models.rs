//! Payload contracts shared by the AI path and the fallback path.
//!
//! Whatever produced a payload, the client sees the same shape. AI output must
//! additionally pass `ShapeCheck` before it is trusted.

use serde::{Deserialize, Serialize};

/// Semantic checks serde cannot express (non-empty lists, score bounds).
pub trait ShapeCheck {
    fn check_shape(&self) -> Result<(), String>;
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be blank"))
    } else {
        Ok(())
    }
}

fn require_score(field: &str, value: u32) -> Result<(), String> {
    if value > 100 {
        Err(format!("{field} must be within 0-100, got {value}"))
    } else {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career recommendations (/analyze)
// ────────────────────────────────────────────────────────────────────────────

/// One recommended career. Field names are snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub match_percentage: u32,
    pub salary_range: String,
    pub growth_outlook: String,
    pub key_skills: Vec<String>,
    pub daily_tasks: Vec<String>,
    pub learning_path: Vec<String>,
    pub time_to_proficiency: String,
    pub difficulty_level: String,
    pub industry_demand: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub summary: String,
}

impl ShapeCheck for CareerAnalysis {
    fn check_shape(&self) -> Result<(), String> {
        if self.recommendations.is_empty() {
            return Err("recommendations must not be empty".to_string());
        }
        for rec in &self.recommendations {
            require_text("recommendation title", &rec.title)?;
            require_score("match_percentage", rec.match_percentage)?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmaps and learning paths (/roadmap, /learning-path)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
}

fn check_phases(phases: &[RoadmapPhase]) -> Result<(), String> {
    if phases.is_empty() {
        return Err("phases must not be empty".to_string());
    }
    for phase in phases {
        require_text("phase title", &phase.title)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub role: String,
    #[serde(default)]
    pub overview: String,
    pub total_duration: String,
    pub phases: Vec<RoadmapPhase>,
}

impl ShapeCheck for Roadmap {
    fn check_shape(&self) -> Result<(), String> {
        check_phases(&self.phases)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub target_role: String,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    pub total_duration: String,
    #[serde(default)]
    pub weekly_commitment: String,
    pub phases: Vec<RoadmapPhase>,
}

impl ShapeCheck for LearningPath {
    fn check_shape(&self) -> Result<(), String> {
        check_phases(&self.phases)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mock interviews (/mock-interview)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    #[serde(default)]
    pub id: u32,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub expected_points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSet {
    pub questions: Vec<InterviewQuestion>,
}

impl ShapeCheck for InterviewSet {
    fn check_shape(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err("questions must not be empty".to_string());
        }
        for q in &self.questions {
            require_text("question", &q.question)?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume analysis (/analyze-resume)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub section: String,
    pub score: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub overall_score: u32,
    pub ats_score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    #[serde(default)]
    pub keywords: KeywordReport,
    #[serde(default)]
    pub section_feedback: Vec<SectionFeedback>,
    #[serde(default)]
    pub summary: String,
}

impl ShapeCheck for ResumeAnalysis {
    fn check_shape(&self) -> Result<(), String> {
        require_score("overallScore", self.overall_score)?;
        require_score("atsScore", self.ats_score)?;
        for section in &self.section_feedback {
            require_score("section score", section.score)?;
        }
        if self.strengths.is_empty() && self.improvements.is_empty() {
            return Err("analysis must list strengths or improvements".to_string());
        }
        Ok(())
    }
}
