//! In-memory catalog and fixtures for tests.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use super::CareerCatalog;
use crate::errors::AppError;
use crate::models::career::{
    CareerCourseRow, CareerOptionRow, CareerPathDetail, CareerPathRow, CareerProjectRow,
    CareerResourceRow, CareerSkillRow,
};

#[derive(Default)]
pub struct InMemoryCatalog {
    pub options: Vec<CareerOptionRow>,
    pub paths: Vec<CareerPathDetail>,
    /// Simulates an unreachable database.
    pub unavailable: bool,
}

impl InMemoryCatalog {
    pub fn with_options(options: Vec<CareerOptionRow>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }
}

#[async_trait]
impl CareerCatalog for InMemoryCatalog {
    async fn recent_career_options(&self, limit: i64) -> Result<Vec<CareerOptionRow>, AppError> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut rows: Vec<_> = self.options.iter().filter(|o| o.is_active).cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn find_career_path(&self, role: &str) -> Result<Option<CareerPathDetail>, AppError> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        let needle = role.trim().to_lowercase();
        Ok(self
            .paths
            .iter()
            .find(|p| p.path.title.to_lowercase().contains(&needle))
            .cloned())
    }
}

/// Builds an active option; higher ids are created later.
pub fn option(id: i32, title: &str, category: &str, skills: &[&str]) -> CareerOptionRow {
    CareerOptionRow {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: format!("{title} role in {category}"),
        salary_min: Some(60_000),
        salary_max: Some(95_000),
        difficulty_level: "Intermediate".to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        growth_outlook: Some("High growth expected".to_string()),
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id as i64),
    }
}

/// A mixed catalog covering every keyword bucket.
pub fn sample_options() -> Vec<CareerOptionRow> {
    vec![
        option(1, "Software Engineer", "Technology", &["Rust", "Git", "SQL"]),
        option(2, "Frontend Developer", "Technology", &["JavaScript", "React"]),
        option(3, "Data Analyst", "Data Science", &["SQL", "Excel", "Tableau"]),
        option(4, "UX Designer", "Design", &["Figma", "User Research"]),
        option(5, "Product Manager", "Business", &["Roadmapping", "Communication"]),
        option(6, "Digital Marketing Specialist", "Marketing", &["SEO", "Analytics"]),
        option(7, "Security Analyst", "Cybersecurity", &["Networking", "SIEM"]),
        option(8, "Machine Learning Engineer", "Data Science", &["Python", "PyTorch"]),
    ]
}

fn skill(id: i32, name: &str, skill_type: &str, difficulty: &str) -> CareerSkillRow {
    CareerSkillRow {
        id,
        career_path_id: 1,
        name: name.to_string(),
        skill_type: skill_type.to_string(),
        difficulty: difficulty.to_string(),
    }
}

fn course(id: i32, title: &str, difficulty: &str) -> CareerCourseRow {
    CareerCourseRow {
        id,
        career_path_id: 1,
        title: title.to_string(),
        provider: Some("Coursera".to_string()),
        url: None,
        difficulty: difficulty.to_string(),
    }
}

fn project(id: i32, title: &str, difficulty: &str) -> CareerProjectRow {
    CareerProjectRow {
        id,
        career_path_id: 1,
        title: title.to_string(),
        description: None,
        difficulty: difficulty.to_string(),
    }
}

fn resource(id: i32, title: &str, resource_type: &str, difficulty: &str) -> CareerResourceRow {
    CareerResourceRow {
        id,
        career_path_id: 1,
        title: title.to_string(),
        resource_type: resource_type.to_string(),
        url: None,
        difficulty: difficulty.to_string(),
    }
}

/// A "Data Scientist" path; `with_advanced` controls whether advanced-tier rows exist.
pub fn data_scientist_path(with_advanced: bool) -> CareerPathDetail {
    let mut skills = vec![
        skill(1, "Python", "technical", "Beginner"),
        skill(2, "Statistics", "technical", "Beginner"),
        skill(3, "Machine Learning", "technical", "Intermediate"),
        skill(4, "Communication", "soft", "Beginner"),
        skill(5, "Stakeholder Management", "soft", "Intermediate"),
    ];
    let mut courses = vec![
        course(1, "Python for Everybody", "Beginner"),
        course(2, "Applied Machine Learning", "Intermediate"),
    ];
    let mut projects = vec![
        project(1, "Exploratory analysis of a public dataset", "Beginner"),
        project(2, "Churn prediction model", "Intermediate"),
    ];
    let resources = vec![
        resource(1, "Python Data Science Handbook", "book", "Beginner"),
        resource(2, "Kaggle Learn", "website", "Intermediate"),
        resource(3, "TensorFlow Developer Certificate", "certification", "Advanced"),
    ];
    if with_advanced {
        skills.push(skill(6, "Deep Learning", "technical", "Advanced"));
        courses.push(course(3, "Deep Learning Specialization", "Advanced"));
        projects.push(project(3, "Deploy a model behind an API", "Advanced"));
    }
    CareerPathDetail {
        path: CareerPathRow {
            id: 1,
            title: "Data Scientist".to_string(),
            category: "Data Science".to_string(),
            overview: "Turn data into decisions with statistics and machine learning.".to_string(),
            day_in_life: Some("Cleaning data, building models, presenting findings.".to_string()),
            salary_expectations: Some("$90,000 - $150,000".to_string()),
            growth_outlook: Some("Much faster than average".to_string()),
        },
        skills,
        courses,
        projects,
        resources,
    }
}
