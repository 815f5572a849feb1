//! Fallback Recommender: deterministic career recommendations from the catalog.
//!
//! Algorithm:
//! 1. Load up to `CANDIDATE_LIMIT` active career options, newest first.
//! 2. Detect the user's interest bucket (fixed precedence, first match wins).
//! 3. Keep options whose category or title fall in that bucket; with no bucket or
//!    no matching option, use the first `UNFILTERED_POOL` options instead.
//! 4. The first `MAX_RECOMMENDATIONS` become primary picks, scored from 95 down, floor 75.
//! 5. Short lists are padded from the first `PADDING_POOL` options (titles not yet
//!    chosen), scored 70–80.
//!
//! Output: 0–3 recommendations, every `match_percentage` within [70, 95].

use rand::Rng;

use crate::catalog::CareerCatalog;
use crate::coach::keywords::{detect_bucket, KeywordBucket};
use crate::coach::models::Recommendation;
use crate::errors::AppError;
use crate::models::career::CareerOptionRow;

pub const CANDIDATE_LIMIT: i64 = 20;
pub const MAX_RECOMMENDATIONS: usize = 3;
const UNFILTERED_POOL: usize = 6;
const PADDING_POOL: usize = 5;

const PRIMARY_SEED: u32 = 95;
const PRIMARY_STEP: u32 = 5;
const PRIMARY_JITTER: u32 = 4;
const PRIMARY_FLOOR: u32 = 75;

const PADDING_SEED: u32 = 80;
const PADDING_STEP: u32 = 3;
const PADDING_JITTER: u32 = 3;
const PADDING_FLOOR: u32 = 70;

/// Source of the small downward jitter applied to synthesized match percentages.
pub trait ScoreJitter: Send + Sync {
    /// A value in `0..=max` for the recommendation at `index`.
    fn jitter(&self, index: usize, max: u32) -> u32;
}

/// Production jitter from the thread-local RNG.
pub struct RandomJitter;

impl ScoreJitter for RandomJitter {
    fn jitter(&self, _index: usize, max: u32) -> u32 {
        rand::thread_rng().gen_range(0..=max)
    }
}

/// No jitter: percentages depend only on position.
pub struct NoJitter;

impl ScoreJitter for NoJitter {
    fn jitter(&self, _index: usize, _max: u32) -> u32 {
        0
    }
}

/// Loads candidates from the catalog and builds recommendations for `user_text`.
pub async fn recommend_careers(
    catalog: &dyn CareerCatalog,
    jitter: &dyn ScoreJitter,
    user_text: &str,
) -> Result<Vec<Recommendation>, AppError> {
    let candidates = catalog.recent_career_options(CANDIDATE_LIMIT).await?;
    Ok(select_recommendations(&candidates, user_text, jitter))
}

/// The options the primary picks are drawn from, before scoring.
pub fn filter_candidates<'a>(
    candidates: &'a [CareerOptionRow],
    user_text: &str,
) -> (Option<&'static KeywordBucket>, Vec<&'a CareerOptionRow>) {
    let bucket = detect_bucket(user_text);

    let filtered: Vec<&CareerOptionRow> = match bucket {
        Some(bucket) => candidates
            .iter()
            .filter(|c| bucket.matches_entry(&c.category, &c.title))
            .collect(),
        None => Vec::new(),
    };

    if filtered.is_empty() {
        (bucket, candidates.iter().take(UNFILTERED_POOL).collect())
    } else {
        (bucket, filtered)
    }
}

pub fn select_recommendations(
    candidates: &[CareerOptionRow],
    user_text: &str,
    jitter: &dyn ScoreJitter,
) -> Vec<Recommendation> {
    let (bucket, filtered) = filter_candidates(candidates, user_text);

    let mut recommendations: Vec<Recommendation> = filtered
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(i, option)| {
            let base = PRIMARY_SEED.saturating_sub(PRIMARY_STEP * i as u32);
            let score = base
                .saturating_sub(jitter.jitter(i, PRIMARY_JITTER))
                .max(PRIMARY_FLOOR);
            build_recommendation(option, score, bucket)
        })
        .collect();

    let mut padded = 0u32;
    for option in candidates.iter().take(PADDING_POOL) {
        if recommendations.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if recommendations
            .iter()
            .any(|r| r.title.eq_ignore_ascii_case(&option.title))
        {
            continue;
        }
        let index = recommendations.len();
        let base = PADDING_SEED.saturating_sub(PADDING_STEP * padded);
        let score = base
            .saturating_sub(jitter.jitter(index, PADDING_JITTER))
            .clamp(PADDING_FLOOR, PADDING_SEED);
        recommendations.push(build_recommendation(option, score, None));
        padded += 1;
    }

    recommendations
}

fn build_recommendation(
    option: &CareerOptionRow,
    match_percentage: u32,
    bucket: Option<&KeywordBucket>,
) -> Recommendation {
    let growth_outlook = option
        .growth_outlook
        .clone()
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| "Stable demand".to_string());

    let key_skills: Vec<String> = option.required_skills.iter().take(5).cloned().collect();

    let mut reasons = Vec::new();
    match bucket {
        Some(bucket) => reasons.push(format!(
            "Aligns with your interest in {}",
            bucket.label
        )),
        None => reasons.push(format!(
            "A well-established path in {}",
            option.category
        )),
    }
    if !key_skills.is_empty() {
        reasons.push(format!(
            "Builds on in-demand skills such as {}",
            key_skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        ));
    }
    reasons.push(format!("{growth_outlook} for this role"));

    Recommendation {
        title: option.title.clone(),
        description: option.description.clone(),
        match_percentage,
        salary_range: format_salary_range(option.salary_min, option.salary_max),
        industry_demand: industry_demand(&growth_outlook).to_string(),
        growth_outlook,
        daily_tasks: daily_tasks(option),
        learning_path: learning_steps(option),
        key_skills,
        time_to_proficiency: time_to_proficiency(&option.difficulty_level).to_string(),
        difficulty_level: option.difficulty_level.clone(),
        reasons,
    }
}

fn daily_tasks(option: &CareerOptionRow) -> Vec<String> {
    let mut tasks: Vec<String> = option
        .required_skills
        .iter()
        .take(2)
        .map(|skill| format!("Apply {skill} to day-to-day {} work", option.category.to_lowercase()))
        .collect();
    tasks.push(format!(
        "Collaborate with colleagues on {} deliverables",
        option.title.to_lowercase()
    ));
    tasks.push("Keep up with industry tools and best practices".to_string());
    tasks
}

fn learning_steps(option: &CareerOptionRow) -> Vec<String> {
    let mut steps = vec![format!("Learn the fundamentals of {}", option.category)];
    steps.extend(
        option
            .required_skills
            .iter()
            .take(3)
            .map(|skill| format!("Build practical experience with {skill}")),
    );
    steps.push(format!("Create a portfolio project as a {}", option.title));
    steps
}

fn time_to_proficiency(difficulty: &str) -> &'static str {
    match difficulty.trim().to_ascii_lowercase().as_str() {
        "beginner" | "easy" | "entry" => "3-6 months",
        "advanced" | "hard" | "expert" => "12-24 months",
        _ => "6-12 months",
    }
}

fn industry_demand(growth_outlook: &str) -> &'static str {
    let outlook = growth_outlook.to_lowercase();
    if ["high", "fast", "rapid", "strong", "much faster"]
        .iter()
        .any(|t| outlook.contains(t))
    {
        "High"
    } else if ["decline", "slow", "low"].iter().any(|t| outlook.contains(t)) {
        "Low"
    } else {
        "Moderate"
    }
}

/// "$60,000 - $95,000", "From $60,000", "Up to $95,000" or "Varies".
pub fn format_salary_range(min: Option<i32>, max: Option<i32>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("${} - ${}", thousands(min), thousands(max)),
        (Some(min), None) => format!("From ${}", thousands(min)),
        (None, Some(max)) => format!("Up to ${}", thousands(max)),
        (None, None) => "Varies".to_string(),
    }
}

fn thousands(value: i32) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
