//! Roadmap fallback: builds a phased roadmap from catalog data, or a generic template.
//!
//! With a matching career path the phases are:
//!   Foundation → Skill Development → [Advanced Specialization] → Professional Readiness
//! where the advanced phase only exists if the path has advanced-tier skills,
//! courses, projects or resources. Without a match the generic 3-phase roadmap is used.

use crate::catalog::CareerCatalog;
use crate::coach::models::{Roadmap, RoadmapPhase};
use crate::errors::AppError;
use crate::models::career::{CareerPathDetail, DifficultyTier};

/// Catalog-backed roadmap for `role`, or the generic template when no path matches.
pub async fn fallback_roadmap(
    catalog: &dyn CareerCatalog,
    role: &str,
) -> Result<Roadmap, AppError> {
    Ok(match catalog.find_career_path(role).await? {
        Some(detail) => roadmap_from_path(&detail, role),
        None => generic_roadmap(role),
    })
}

/// Items of one tier, gathered from every child table of a path.
struct TierItems {
    skills: Vec<String>,
    courses: Vec<String>,
    projects: Vec<String>,
    resources: Vec<String>,
}

impl TierItems {
    fn collect(detail: &CareerPathDetail, tier: DifficultyTier) -> Self {
        Self {
            skills: detail
                .skills
                .iter()
                .filter(|s| !s.is_soft() && s.tier() == tier)
                .map(|s| s.name.clone())
                .collect(),
            courses: detail
                .courses
                .iter()
                .filter(|c| c.tier() == tier)
                .map(|c| match &c.provider {
                    Some(provider) if !provider.trim().is_empty() => {
                        format!("{} ({provider})", c.title)
                    }
                    _ => c.title.clone(),
                })
                .collect(),
            projects: detail
                .projects
                .iter()
                .filter(|p| p.tier() == tier)
                .map(|p| p.title.clone())
                .collect(),
            resources: detail
                .resources
                .iter()
                .filter(|r| !r.is_certification() && r.tier() == tier)
                .map(|r| r.title.clone())
                .collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.courses.is_empty()
            && self.projects.is_empty()
            && self.resources.is_empty()
    }
}

pub fn roadmap_from_path(detail: &CareerPathDetail, role: &str) -> Roadmap {
    let title = &detail.path.title;
    let beginner = TierItems::collect(detail, DifficultyTier::Beginner);
    let intermediate = TierItems::collect(detail, DifficultyTier::Intermediate);
    let advanced = TierItems::collect(detail, DifficultyTier::Advanced);

    let mut phases = vec![
        RoadmapPhase {
            phase: 1,
            title: "Foundation".to_string(),
            duration: "0-3 months".to_string(),
            description: format!("Build the core knowledge every {title} relies on."),
            milestones: vec![
                format!("Explain the fundamentals of {}", detail.path.category),
                "Complete at least one beginner course".to_string(),
            ],
            skills: beginner.skills,
            courses: beginner.courses,
            projects: beginner.projects,
            resources: beginner.resources,
        },
        RoadmapPhase {
            phase: 2,
            title: "Skill Development".to_string(),
            duration: "3-6 months".to_string(),
            description: format!("Apply your foundation to realistic {title} work."),
            milestones: vec![
                "Ship an end-to-end project".to_string(),
                "Get feedback on your work from a practitioner".to_string(),
            ],
            skills: intermediate.skills,
            courses: intermediate.courses,
            projects: intermediate.projects,
            resources: intermediate.resources,
        },
    ];

    if !advanced.is_empty() {
        phases.push(RoadmapPhase {
            phase: 3,
            title: "Advanced Specialization".to_string(),
            duration: "6-9 months".to_string(),
            description: format!("Go deep on the specialist topics that set senior {title}s apart."),
            milestones: vec![
                "Complete an advanced project you can discuss in depth".to_string(),
                "Choose a specialization area".to_string(),
            ],
            skills: advanced.skills,
            courses: advanced.courses,
            projects: advanced.projects,
            resources: advanced.resources,
        });
    }

    let soft_skills: Vec<String> = detail
        .skills
        .iter()
        .filter(|s| s.is_soft())
        .map(|s| s.name.clone())
        .collect();
    let certifications: Vec<String> = detail
        .resources
        .iter()
        .filter(|r| r.is_certification())
        .map(|r| r.title.clone())
        .collect();

    let readiness_start = if phases.len() == 3 { 9 } else { 6 };
    phases.push(RoadmapPhase {
        phase: phases.len() as u32 + 1,
        title: "Professional Readiness".to_string(),
        duration: format!("{}-{} months", readiness_start, readiness_start + 3),
        description: format!("Package your experience and start applying for {title} roles."),
        skills: soft_skills,
        courses: Vec::new(),
        projects: vec!["Polish a portfolio of your strongest projects".to_string()],
        resources: certifications,
        milestones: vec![
            "Tailor your resume to target roles".to_string(),
            "Complete mock interviews".to_string(),
            format!("Apply to {title} positions"),
        ],
    });

    let total_months = readiness_start + 3;
    Roadmap {
        role: role.trim().to_string(),
        overview: detail.path.overview.clone(),
        total_duration: format!("{total_months} months"),
        phases,
    }
}

/// Template used when the catalog has no matching career path.
pub fn generic_roadmap(role: &str) -> Roadmap {
    let role = role.trim();
    Roadmap {
        role: role.to_string(),
        overview: format!(
            "A general plan for becoming a {role}. Adjust it once you know which \
             employers and specializations you are targeting."
        ),
        total_duration: "9 months".to_string(),
        phases: vec![
            RoadmapPhase {
                phase: 1,
                title: "Foundation".to_string(),
                duration: "0-3 months".to_string(),
                description: format!("Learn the core concepts and vocabulary of the {role} field."),
                skills: vec![
                    format!("Core {role} fundamentals"),
                    "Industry terminology".to_string(),
                    "Essential tools of the trade".to_string(),
                ],
                courses: vec![format!("An introductory {role} course")],
                projects: vec!["A small guided practice project".to_string()],
                resources: vec![
                    "Professional association websites".to_string(),
                    "Beginner-friendly books and tutorials".to_string(),
                ],
                milestones: vec![
                    "Understand what the role involves day to day".to_string(),
                    "Finish one introductory course".to_string(),
                ],
            },
            RoadmapPhase {
                phase: 2,
                title: "Skill Development".to_string(),
                duration: "3-6 months".to_string(),
                description: "Turn knowledge into practical, demonstrable skills.".to_string(),
                skills: vec![
                    "Hands-on practical skills".to_string(),
                    "Problem solving".to_string(),
                    "Collaboration".to_string(),
                ],
                courses: vec![format!("An intermediate {role} course")],
                projects: vec![
                    "An independent project solving a real problem".to_string(),
                    "A volunteer or freelance engagement".to_string(),
                ],
                resources: vec!["Online communities and forums".to_string()],
                milestones: vec![
                    "Complete two portfolio projects".to_string(),
                    "Connect with practitioners in the field".to_string(),
                ],
            },
            RoadmapPhase {
                phase: 3,
                title: "Professional Readiness".to_string(),
                duration: "6-9 months".to_string(),
                description: format!("Prepare to land your first {role} position."),
                skills: vec![
                    "Communication".to_string(),
                    "Interviewing".to_string(),
                    "Professional networking".to_string(),
                ],
                courses: Vec::new(),
                projects: vec!["Polish your portfolio".to_string()],
                resources: vec!["Relevant industry certifications".to_string()],
                milestones: vec![
                    "Tailor your resume to target roles".to_string(),
                    "Complete mock interviews".to_string(),
                    format!("Apply to {role} positions"),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::{data_scientist_path, InMemoryCatalog};

    fn phase_titles(roadmap: &Roadmap) -> Vec<&str> {
        roadmap.phases.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_generic_roadmap_has_three_phases() {
        let roadmap = generic_roadmap("Marine Biologist");
        assert_eq!(
            phase_titles(&roadmap),
            vec!["Foundation", "Skill Development", "Professional Readiness"]
        );
        assert_eq!(roadmap.role, "Marine Biologist");
        assert!(roadmap.phases.iter().all(|p| !p.skills.is_empty()));
    }

    #[test]
    fn test_path_with_advanced_data_has_four_phases() {
        let roadmap = roadmap_from_path(&data_scientist_path(true), "data scientist");
        assert_eq!(
            phase_titles(&roadmap),
            vec![
                "Foundation",
                "Skill Development",
                "Advanced Specialization",
                "Professional Readiness"
            ]
        );
        assert_eq!(roadmap.phases[2].skills, vec!["Deep Learning"]);
        assert_eq!(roadmap.phases[3].phase, 4);
        assert_eq!(roadmap.total_duration, "12 months");
    }

    #[test]
    fn test_certification_only_advanced_data_does_not_add_phase() {
        // The fixture's only advanced row without `with_advanced` is a certification,
        // which belongs to Professional Readiness.
        let roadmap = roadmap_from_path(&data_scientist_path(false), "Data Scientist");
        assert_eq!(roadmap.phases.len(), 3);
        assert_eq!(roadmap.phases[2].phase, 3);
        assert_eq!(roadmap.phases[2].duration, "6-9 months");
    }

    #[test]
    fn test_items_partitioned_by_tier() {
        let roadmap = roadmap_from_path(&data_scientist_path(true), "Data Scientist");
        let foundation = &roadmap.phases[0];
        assert_eq!(foundation.skills, vec!["Python", "Statistics"]);
        assert_eq!(foundation.courses, vec!["Python for Everybody (Coursera)"]);
        assert_eq!(foundation.resources, vec!["Python Data Science Handbook"]);

        let development = &roadmap.phases[1];
        assert_eq!(development.skills, vec!["Machine Learning"]);
        assert_eq!(development.projects, vec!["Churn prediction model"]);
        assert_eq!(development.resources, vec!["Kaggle Learn"]);
    }

    #[test]
    fn test_soft_skills_and_certifications_go_to_readiness() {
        let roadmap = roadmap_from_path(&data_scientist_path(true), "Data Scientist");
        let readiness = roadmap.phases.last().unwrap();
        assert_eq!(
            readiness.skills,
            vec!["Communication", "Stakeholder Management"]
        );
        assert_eq!(readiness.resources, vec!["TensorFlow Developer Certificate"]);
        assert!(roadmap
            .phases
            .iter()
            .take(3)
            .all(|p| !p.skills.contains(&"Communication".to_string())));
    }

    #[tokio::test]
    async fn test_fallback_uses_matching_path_case_insensitively() {
        let catalog = InMemoryCatalog {
            paths: vec![data_scientist_path(true)],
            ..Default::default()
        };
        let roadmap = fallback_roadmap(&catalog, "data SCIENTIST").await.unwrap();
        assert_eq!(roadmap.phases.len(), 4);
        assert!(roadmap.overview.contains("statistics"));
    }

    #[tokio::test]
    async fn test_fallback_without_match_is_generic() {
        let catalog = InMemoryCatalog {
            paths: vec![data_scientist_path(true)],
            ..Default::default()
        };
        let roadmap = fallback_roadmap(&catalog, "Pastry Chef").await.unwrap();
        assert_eq!(roadmap.phases.len(), 3);
        assert_eq!(roadmap.role, "Pastry Chef");
    }
}
