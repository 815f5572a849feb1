//! Learning-path fallback: the roadmap for the target role, minus what the user already knows.

use std::collections::HashSet;

use crate::catalog::CareerCatalog;
use crate::coach::models::{LearningPath, Roadmap};
use crate::coach::requests::{LearningPathRequest, LearningStyle, DEFAULT_HOURS_PER_WEEK};
use crate::coach::roadmap::fallback_roadmap;
use crate::errors::AppError;

/// Both roadmap builders schedule roughly three months per phase at the default pace.
const MONTHS_PER_PHASE: u32 = 3;

pub async fn fallback_learning_path(
    catalog: &dyn CareerCatalog,
    request: &LearningPathRequest,
) -> Result<LearningPath, AppError> {
    let roadmap = fallback_roadmap(catalog, &request.target_role).await?;
    Ok(learning_path_from_roadmap(roadmap, request))
}

pub fn learning_path_from_roadmap(roadmap: Roadmap, request: &LearningPathRequest) -> LearningPath {
    let known: HashSet<String> = request
        .current_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let mut skill_gaps: Vec<String> = Vec::new();
    let mut phases = roadmap.phases;
    for phase in &mut phases {
        phase.skills.retain(|s| !known.contains(&s.to_lowercase()));
        for skill in &phase.skills {
            if !skill_gaps.iter().any(|g| g.eq_ignore_ascii_case(skill)) {
                skill_gaps.push(skill.clone());
            }
        }
        if let Some(hint) = style_resource(request.learning_style) {
            phase.resources.push(hint.to_string());
        }
    }

    let hours = request.hours_per_week();
    let months = estimated_months(phases.len() as u32 * MONTHS_PER_PHASE, hours);
    let total_duration = match request.timeframe.as_deref().map(str::trim) {
        Some(timeframe) if !timeframe.is_empty() => {
            format!("{timeframe} target (estimated {months} months at {hours} hours/week)")
        }
        _ => format!("{months} months"),
    };

    LearningPath {
        target_role: request.target_role.trim().to_string(),
        skill_gaps,
        total_duration,
        weekly_commitment: format!("{hours} hours per week"),
        phases,
    }
}

/// Scales the default-pace estimate by the weekly commitment, within half to double.
fn estimated_months(base_months: u32, hours_per_week: u32) -> u32 {
    let hours = hours_per_week.max(1);
    let scaled = (base_months * DEFAULT_HOURS_PER_WEEK).div_ceil(hours);
    scaled.clamp((base_months / 2).max(1), base_months * 2)
}

fn style_resource(style: Option<LearningStyle>) -> Option<&'static str> {
    match style? {
        LearningStyle::Visual => Some("Video lectures and visual explainers"),
        LearningStyle::HandsOn => Some("Interactive labs and build-along tutorials"),
        LearningStyle::Reading => Some("Books and written documentation"),
        LearningStyle::Mixed => None,
    }
}
