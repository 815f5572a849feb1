//! Mock-interview fallback: question banks templated with the candidate's role.

use crate::coach::models::InterviewQuestion;
use crate::coach::requests::{Difficulty, InterviewType, MockInterviewRequest};

/// (question template, expected points). `{role}` and `{experience}` are substituted.
type BankEntry = (&'static str, &'static [&'static str]);

const TECHNICAL_BANK: &[BankEntry] = &[
    (
        "Walk me through the most technically challenging project you worked on as a {role}.",
        &["Context and constraints", "Your specific contribution", "Trade-offs considered", "Measurable outcome"],
    ),
    (
        "How do you approach debugging a problem you have never seen before?",
        &["Reproduce the issue", "Form and test hypotheses", "Use logs and tooling", "Prevent regressions"],
    ),
    (
        "Which tools and technologies do you rely on most as a {role}, and why?",
        &["Concrete tools", "Reasons for the choice", "Awareness of alternatives"],
    ),
    (
        "How do you make sure the work you deliver is reliable and maintainable?",
        &["Testing strategy", "Code or work review", "Documentation", "Monitoring"],
    ),
    (
        "Describe how you would explain a complex technical concept from your {experience} of work to a non-technical stakeholder.",
        &["Audience awareness", "Analogies or visuals", "Checking understanding"],
    ),
    (
        "Tell me about a time you had to learn a new technology quickly. How did you go about it?",
        &["Learning strategy", "Time pressure handling", "Applying the knowledge"],
    ),
];

const BEHAVIORAL_BANK: &[BankEntry] = &[
    (
        "Tell me about yourself and why you are interested in this {role} position.",
        &["Relevant background", "Motivation", "Fit with the role"],
    ),
    (
        "Describe a time you disagreed with a teammate. How did you resolve it?",
        &["Situation", "Respectful communication", "Resolution", "What you learned"],
    ),
    (
        "Tell me about a mistake you made and what you learned from it.",
        &["Ownership", "Corrective action", "Lasting lesson"],
    ),
    (
        "Give an example of a goal you set and how you achieved it.",
        &["Specific goal", "Plan and execution", "Result with evidence"],
    ),
    (
        "Describe a situation where you had to manage several priorities at once.",
        &["Prioritisation method", "Communication with stakeholders", "Outcome"],
    ),
    (
        "Where do you see your career going over the next few years?",
        &["Realistic ambition", "Link to this role", "Growth mindset"],
    ),
];

const SYSTEM_DESIGN_BANK: &[BankEntry] = &[
    (
        "Design a URL shortening service. How would you handle scale and reliability?",
        &["Requirements clarification", "Data model", "Scaling reads", "Failure handling"],
    ),
    (
        "How would you design a notification system that sends email, SMS and push messages?",
        &["Queueing", "Retries and idempotency", "User preferences", "Rate limiting"],
    ),
    (
        "Design the backend for a collaborative document editor.",
        &["Concurrency model", "Conflict resolution", "Persistence", "Latency"],
    ),
    (
        "How would you design a rate limiter for a public API?",
        &["Algorithm choice", "Distributed state", "Client feedback"],
    ),
    (
        "Walk me through designing a system a {role} at your level ({experience}) has built or would build day to day.",
        &["Components", "Interfaces", "Trade-offs", "Observability"],
    ),
];

pub fn fallback_questions(request: &MockInterviewRequest) -> Vec<InterviewQuestion> {
    let count = request.question_count();
    let banks: Vec<(&str, &[BankEntry])> = match request.interview_type {
        InterviewType::Technical => vec![("technical", TECHNICAL_BANK)],
        InterviewType::Behavioral => vec![("behavioral", BEHAVIORAL_BANK)],
        InterviewType::SystemDesign => vec![("system_design", SYSTEM_DESIGN_BANK)],
        InterviewType::Mixed => vec![
            ("technical", TECHNICAL_BANK),
            ("behavioral", BEHAVIORAL_BANK),
            ("system_design", SYSTEM_DESIGN_BANK),
        ],
    };

    (0..count)
        .map(|i| {
            // Interleave banks; cycle through each bank once it is exhausted.
            let (question_type, bank) = banks[i % banks.len()];
            let (template, points) = bank[(i / banks.len()) % bank.len()];
            InterviewQuestion {
                id: i as u32 + 1,
                question: template
                    .replace("{role}", request.role.trim())
                    .replace("{experience}", request.experience.trim()),
                question_type: question_type.to_string(),
                difficulty: request.difficulty.as_str().to_string(),
                tips: tips_for(question_type, request.difficulty),
                expected_points: points.iter().map(|p| p.to_string()).collect(),
            }
        })
        .collect()
}

fn tips_for(question_type: &str, difficulty: Difficulty) -> Vec<String> {
    let mut tips = vec![match question_type {
        "behavioral" => "Use the STAR method: Situation, Task, Action, Result.",
        "system_design" => "Clarify requirements and scale before drawing components.",
        _ => "Think out loud so the interviewer can follow your reasoning.",
    }
    .to_string()];
    tips.push(
        match difficulty {
            Difficulty::Beginner => "Focus on fundamentals and be honest about what you are still learning.",
            Difficulty::Intermediate => "Support your answer with a concrete example from your own work.",
            Difficulty::Advanced => "Discuss trade-offs, edge cases and how your approach scales.",
        }
        .to_string(),
    );
    tips
}

/// Rough session length: a few minutes per question, longer for design questions.
pub fn estimated_minutes(questions: &[InterviewQuestion]) -> u32 {
    questions
        .iter()
        .map(|q| if q.question_type == "system_design" { 10 } else { 5 })
        .sum()
}
