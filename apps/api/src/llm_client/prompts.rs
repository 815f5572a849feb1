// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona shared by every coaching prompt.
pub const COACH_PERSONA: &str = "You are an experienced career coach who helps students \
    and early-career professionals plan, prepare for and land their next role. \
    Be specific, practical and encouraging. Never invent salaries or statistics \
    you cannot justify; give ranges and say when they vary by region.";

/// Builds a system prompt for a structured (JSON) coaching task.
pub fn structured_system(task_system: &str) -> String {
    format!("{COACH_PERSONA}\n\n{task_system}\n\n{JSON_ONLY_SYSTEM}")
}
