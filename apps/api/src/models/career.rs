use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single job title maintained through the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerOptionRow {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub difficulty_level: String,
    pub required_skills: Vec<String>,
    pub growth_outlook: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPathRow {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub overview: String,
    pub day_in_life: Option<String>,
    pub salary_expectations: Option<String>,
    pub growth_outlook: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerSkillRow {
    pub id: i32,
    pub career_path_id: i32,
    pub name: String,
    /// "technical" | "soft"
    pub skill_type: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerCourseRow {
    pub id: i32,
    pub career_path_id: i32,
    pub title: String,
    pub provider: Option<String>,
    pub url: Option<String>,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerProjectRow {
    pub id: i32,
    pub career_path_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerResourceRow {
    pub id: i32,
    pub career_path_id: i32,
    pub title: String,
    /// "book" | "website" | "certification"
    pub resource_type: String,
    pub url: Option<String>,
    pub difficulty: String,
}

/// A career path together with all of its child rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathDetail {
    pub path: CareerPathRow,
    pub skills: Vec<CareerSkillRow>,
    pub courses: Vec<CareerCourseRow>,
    pub projects: Vec<CareerProjectRow>,
    pub resources: Vec<CareerResourceRow>,
}

/// Difficulty tier shared by every career path child table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// Case-insensitive parse. Unknown tiers land in the middle.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" | "basic" | "entry" => DifficultyTier::Beginner,
            "advanced" | "expert" => DifficultyTier::Advanced,
            _ => DifficultyTier::Intermediate,
        }
    }
}

impl CareerSkillRow {
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::parse(&self.difficulty)
    }

    pub fn is_soft(&self) -> bool {
        self.skill_type.eq_ignore_ascii_case("soft")
    }
}

impl CareerCourseRow {
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::parse(&self.difficulty)
    }
}

impl CareerProjectRow {
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::parse(&self.difficulty)
    }
}

impl CareerResourceRow {
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::parse(&self.difficulty)
    }

    pub fn is_certification(&self) -> bool {
        self.resource_type.eq_ignore_ascii_case("certification")
    }
}
