//! Career catalog: read-only access to the career tables maintained by the admin console.
//!
//! The coach only ever reads these tables, and only on the fallback path.
//! `AppState` holds an `Arc<dyn CareerCatalog>` so handlers can be tested without Postgres.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::career::{
    CareerCourseRow, CareerOptionRow, CareerPathDetail, CareerPathRow, CareerProjectRow,
    CareerResourceRow, CareerSkillRow,
};

#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait CareerCatalog: Send + Sync {
    /// Active career options, most recently created first.
    async fn recent_career_options(&self, limit: i64) -> Result<Vec<CareerOptionRow>, AppError>;

    /// First career path whose title contains `role`, case-insensitively, with its children.
    async fn find_career_path(&self, role: &str) -> Result<Option<CareerPathDetail>, AppError>;
}

pub struct PgCareerCatalog {
    pool: PgPool,
}

impl PgCareerCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerCatalog for PgCareerCatalog {
    async fn recent_career_options(&self, limit: i64) -> Result<Vec<CareerOptionRow>, AppError> {
        let rows = sqlx::query_as::<_, CareerOptionRow>(
            r#"
            SELECT id, title, category, description, salary_min, salary_max,
                   difficulty_level, required_skills, growth_outlook, is_active, created_at
            FROM career_options
            WHERE is_active = TRUE
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_career_path(&self, role: &str) -> Result<Option<CareerPathDetail>, AppError> {
        let pattern = format!("%{}%", escape_like(role.trim()));

        let path = sqlx::query_as::<_, CareerPathRow>(
            r#"
            SELECT id, title, category, overview, day_in_life, salary_expectations, growth_outlook
            FROM career_paths
            WHERE title ILIKE $1 ESCAPE '\'
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(&pattern)
        .fetch_optional(&self.pool)
        .await?;

        let Some(path) = path else {
            return Ok(None);
        };

        let skills = sqlx::query_as::<_, CareerSkillRow>(
            "SELECT id, career_path_id, name, skill_type, difficulty \
             FROM career_skills WHERE career_path_id = $1 ORDER BY id",
        )
        .bind(path.id)
        .fetch_all(&self.pool)
        .await?;

        let courses = sqlx::query_as::<_, CareerCourseRow>(
            "SELECT id, career_path_id, title, provider, url, difficulty \
             FROM career_courses WHERE career_path_id = $1 ORDER BY id",
        )
        .bind(path.id)
        .fetch_all(&self.pool)
        .await?;

        let projects = sqlx::query_as::<_, CareerProjectRow>(
            "SELECT id, career_path_id, title, description, difficulty \
             FROM career_projects WHERE career_path_id = $1 ORDER BY id",
        )
        .bind(path.id)
        .fetch_all(&self.pool)
        .await?;

        let resources = sqlx::query_as::<_, CareerResourceRow>(
            "SELECT id, career_path_id, title, resource_type, url, difficulty \
             FROM career_resources WHERE career_path_id = $1 ORDER BY id",
        )
        .bind(path.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(CareerPathDetail {
            path,
            skills,
            courses,
            projects,
            resources,
        }))
    }
}

/// Escapes LIKE wildcards so user input is matched literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
