//! Resume analysis fallback: heuristic scoring of structure, impact and keyword fit.
//!
//! Scoring (0–100 each, weights sum to 100):
//! - core section coverage (summary, experience, education, skills)   30
//! - share of bullets with quantified impact                          25
//! - share of bullets opening with an action verb                     15
//! - keyword overlap with the job description / target role           15
//! - length within 250–900 words                                      15

use std::collections::HashMap;

use crate::coach::keywords::mentions;
use crate::coach::models::{KeywordReport, ResumeAnalysis, SectionFeedback};
use crate::coach::requests::ResumeAnalysisRequest;

const CORE_SECTIONS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "profile", "objective", "about me"]),
    ("experience", &["experience", "employment", "work history"]),
    ("education", &["education", "academic background"]),
    ("skills", &["skills", "competencies", "technologies"]),
];

const EXTRA_SECTIONS: &[(&str, &[&str])] = &[
    ("projects", &["projects", "portfolio"]),
    ("certifications", &["certifications", "certificates", "licenses"]),
];

const ACTION_VERBS: &[&str] = &[
    "achieved", "analyzed", "architected", "automated", "built", "created", "delivered",
    "designed", "developed", "drove", "implemented", "improved", "increased", "launched",
    "led", "managed", "mentored", "optimized", "organized", "reduced", "resolved",
    "shipped", "streamlined", "trained",
];

const VAGUE_VERBS: &[&str] = &[
    "helped",
    "worked on",
    "assisted",
    "supported",
    "participated",
    "involved",
    "responsible for",
];

const VAGUE_SCALE_WORDS: &[&str] = &[
    "significant",
    "major",
    "huge",
    "massive",
    "substantial",
    "considerable",
    "many",
    "numerous",
    "various",
    "several",
];

const STOPWORDS: &[&str] = &[
    "about", "also", "with", "that", "this", "from", "will", "have", "your", "their", "they",
    "what", "when", "where", "which", "while", "into", "than", "then", "them", "were", "been",
    "being", "able", "must", "should", "would", "could", "such", "other", "some", "more",
    "most", "very", "work", "team", "role", "years", "year", "experience", "strong", "including",
    "across", "using", "within", "ability", "skills", "knowledge", "plus", "preferred",
    "required", "requirements", "responsibilities", "candidate", "join", "looking",
];

const MAX_TARGET_KEYWORDS: usize = 15;
/// Keyword credit used when there is no job description or target role to compare against.
const NEUTRAL_KEYWORD_RATIO: f64 = 0.6;

/// True if the text carries a number, percentage, currency amount or `~N` estimate.
pub fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || text.contains('$')
        || text.contains('€')
        || text.contains('£')
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(['-', '*', '•', '–', '▪'])
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '*', '•', '–', '▪']).trim()
}

fn is_heading(line: &str, terms: &[&str]) -> bool {
    if line.chars().count() > 40 || is_bullet(line) {
        return false;
    }
    let lower = line.to_lowercase();
    terms.iter().any(|t| mentions(&lower, t))
}

fn find_sections<'a>(lines: &[&str], sections: &[(&'a str, &[&str])]) -> Vec<&'a str> {
    sections
        .iter()
        .filter(|(_, terms)| lines.iter().any(|l| is_heading(l, terms)))
        .map(|(name, _)| *name)
        .collect()
}

/// Most frequent meaningful words in the target text, most frequent first.
fn target_keywords(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|w| w.len() >= 4 && !STOPWORDS.contains(w))
        .enumerate()
    {
        counts.entry(word.to_string()).or_insert((0, position)).0 += 1;
    }
    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(MAX_TARGET_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn length_score(words: usize) -> f64 {
    match words {
        250..=900 => 1.0,
        150..=249 | 901..=1200 => 0.6,
        _ => 0.3,
    }
}

pub fn analyze_resume(request: &ResumeAnalysisRequest) -> ResumeAnalysis {
    let text = request.resume_text.as_str();
    let lower = text.to_lowercase();
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let word_count = text.split_whitespace().count();

    let core_found = find_sections(&lines, CORE_SECTIONS);
    let extra_found = find_sections(&lines, EXTRA_SECTIONS);

    let mut bullets: Vec<&str> = lines.iter().filter(|l| is_bullet(l)).map(|l| strip_bullet(l)).collect();
    if bullets.is_empty() {
        bullets = lines.iter().copied().filter(|l| l.chars().count() > 30).collect();
    }

    let quantified = bullets.iter().filter(|b| is_quantified(b)).count();
    let action_led = bullets
        .iter()
        .filter(|b| {
            b.split_whitespace()
                .next()
                .map(|w| ACTION_VERBS.contains(&w.to_lowercase().trim_end_matches(',')))
                .unwrap_or(false)
        })
        .count();

    let target_text = [request.job_description.as_deref(), request.target_role.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let keywords = if target_text.trim().is_empty() {
        KeywordReport::default()
    } else {
        let (present, missing): (Vec<String>, Vec<String>) = target_keywords(&target_text)
            .into_iter()
            .partition(|k| mentions(&lower, k));
        KeywordReport { present, missing }
    };
    let keyword_total = keywords.present.len() + keywords.missing.len();
    let keyword_ratio = if keyword_total == 0 {
        NEUTRAL_KEYWORD_RATIO
    } else {
        ratio(keywords.present.len(), keyword_total)
    };

    let coverage = ratio(core_found.len(), CORE_SECTIONS.len());
    let quant_ratio = ratio(quantified, bullets.len());
    let action_ratio = ratio(action_led, bullets.len());

    let overall = 30.0 * coverage
        + 25.0 * quant_ratio
        + 15.0 * action_ratio
        + 15.0 * keyword_ratio
        + 15.0 * length_score(word_count);
    let has_contact = text.contains('@') || lower.contains("linkedin");
    let ats = 40.0 * coverage
        + 30.0 * keyword_ratio
        + 15.0 * if bullets.is_empty() { 0.0 } else { 1.0 }
        + 15.0 * if has_contact { 1.0 } else { 0.0 };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if core_found.len() == CORE_SECTIONS.len() {
        strengths.push("Includes every core section recruiters look for".to_string());
    }
    for (name, _) in CORE_SECTIONS {
        if !core_found.contains(name) {
            improvements.push(format!("Add a clearly labelled {name} section"));
        }
    }
    if !extra_found.is_empty() {
        strengths.push(format!("Highlights {}", extra_found.join(" and ")));
    }
    if quant_ratio >= 0.5 {
        strengths.push(format!(
            "{quantified} of {} bullets quantify their impact",
            bullets.len()
        ));
    } else {
        improvements.push(
            "Quantify more achievements with numbers, percentages or time saved".to_string(),
        );
    }
    if action_ratio >= 0.5 {
        strengths.push("Bullets open with strong action verbs".to_string());
    } else {
        improvements.push("Start bullets with action verbs such as Built, Led or Reduced".to_string());
    }

    // Vague wording only matters where no metric backs it up.
    let unquantified_lower: Vec<String> = bullets
        .iter()
        .filter(|b| !is_quantified(b))
        .map(|b| b.to_lowercase())
        .collect();
    if let Some(vague) = VAGUE_VERBS
        .iter()
        .find(|v| unquantified_lower.iter().any(|b| mentions(b, v)))
    {
        improvements.push(format!(
            "Replace vague phrasing like '{vague}' with what you did and the result"
        ));
    }
    if let Some(vague) = VAGUE_SCALE_WORDS
        .iter()
        .find(|v| unquantified_lower.iter().any(|b| mentions(b, v)))
    {
        improvements.push(format!("Replace '{vague}' with a specific number"));
    }

    if !keywords.missing.is_empty() {
        improvements.push(format!(
            "Work in missing keywords where truthful: {}",
            keywords.missing.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
        ));
    } else if !keywords.present.is_empty() {
        strengths.push("Covers the key terms of the target role".to_string());
    }
    if length_score(word_count) < 1.0 {
        improvements.push(format!(
            "Aim for 250-900 words; this resume has {word_count}"
        ));
    }
    if !has_contact {
        improvements.push("Add contact details such as an email address or LinkedIn URL".to_string());
    }
    if improvements.is_empty() {
        improvements.push("Tailor the summary to each role you apply for".to_string());
    }

    let section_feedback = CORE_SECTIONS
        .iter()
        .map(|(name, _)| {
            let found = core_found.contains(name);
            let (score, feedback) = match (*name, found) {
                (_, false) => (0, format!("No {name} section detected.")),
                ("experience", true) => (
                    (50.0 + 50.0 * quant_ratio).round() as u32,
                    format!("{quantified} of {} bullets include measurable results.", bullets.len()),
                ),
                ("skills", true) if keyword_total > 0 => (
                    (100.0 * keyword_ratio).round() as u32,
                    format!(
                        "{} of {keyword_total} target keywords appear in the resume.",
                        keywords.present.len()
                    ),
                ),
                (_, true) => (80, format!("{} section present.", capitalize(name))),
            };
            SectionFeedback {
                section: name.to_string(),
                score,
                feedback,
            }
        })
        .collect();

    let overall_score = overall.round().clamp(0.0, 100.0) as u32;
    ResumeAnalysis {
        overall_score,
        ats_score: ats.round().clamp(0.0, 100.0) as u32,
        summary: format!(
            "Overall score {overall_score}/100: {} of {} core sections found, {quantified} of {} bullets quantified.",
            core_found.len(),
            CORE_SECTIONS.len(),
            bullets.len()
        ),
        strengths,
        improvements,
        keywords,
        section_feedback,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
