//! Chat fallback: a canned coaching reply per mode, nudged toward the interest
//! area the message mentions.

use crate::coach::keywords::detect_bucket;
use crate::coach::requests::CoachingMode;

fn mode_reply(mode: CoachingMode) -> &'static str {
    match mode {
        CoachingMode::General => {
            "A good next step is to write down the kinds of problems you enjoy solving, \
             then compare them with two or three roles that interest you. Look at real job \
             postings for those roles and note which skills keep appearing."
        }
        CoachingMode::Interview => {
            "Prepare three or four stories from your experience that show impact, and \
             practise telling them with the STAR method (Situation, Task, Action, Result). \
             Research the company beforehand and have two thoughtful questions ready for \
             the interviewer."
        }
        CoachingMode::Resume => {
            "Lead each bullet with a strong action verb, quantify results wherever you can, \
             and tailor the skills section to the keywords in the job description. Keep it \
             to one page unless you have many years of directly relevant experience."
        }
        CoachingMode::LearningPath => {
            "Pick one target role and list the skills its job postings ask for. Split them \
             into fundamentals, tools and portfolio projects, then schedule a few focused \
             hours each week and finish with a project you can show employers."
        }
    }
}

/// Follow-up prompts offered to the user after a reply in `mode`.
pub fn suggestions(mode: CoachingMode) -> Vec<String> {
    let items: &[&str] = match mode {
        CoachingMode::General => &[
            "What careers match my interests?",
            "How do I switch careers?",
            "Which skills are most in demand right now?",
        ],
        CoachingMode::Interview => &[
            "Start a mock interview",
            "How do I answer 'Tell me about yourself'?",
            "What questions should I ask the interviewer?",
        ],
        CoachingMode::Resume => &[
            "Analyze my resume",
            "How do I pass applicant tracking systems?",
            "How should I describe a career gap?",
        ],
        CoachingMode::LearningPath => &[
            "Build me a learning path",
            "Which certifications are worth it?",
            "How many hours a week should I study?",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Always returns a non-empty reply.
pub fn fallback_reply(message: &str, mode: CoachingMode) -> String {
    let base = mode_reply(mode);
    match detect_bucket(message) {
        Some(bucket) => format!(
            "Since you mentioned {}, {}{}",
            bucket.label,
            lowercase_first(base),
            focus_hint(bucket.name)
        ),
        None => base.to_string(),
    }
}

fn focus_hint(bucket: &str) -> &'static str {
    match bucket {
        "technology" => " Building small projects and sharing them on GitHub is one of the best ways to show your skills.",
        "data" => " A portfolio of analyses on public datasets goes a long way with data teams.",
        "design" => " A focused portfolio with two or three case studies showing your process matters most.",
        "business" => " Concrete examples of decisions you influenced, with their results, carry the most weight.",
        "marketing" => " Campaign results with real numbers (reach, conversion, growth) make your work tangible.",
        "security" => " Hands-on labs, capture-the-flag challenges and entry-level certifications are a strong start.",
        _ => "",
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
