//! Axum route handlers for the coach API.
//!
//! Every compute handler: validate → one AI attempt → fallback on failure → respond
//! with `{ success, ...payload, source }`.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::coach::chat::{fallback_reply, suggestions};
use crate::coach::features::{feature_catalog, FeatureCatalog};
use crate::coach::interview::{estimated_minutes, fallback_questions};
use crate::coach::keywords::detect_bucket;
use crate::coach::learning_path::fallback_learning_path;
use crate::coach::models::{
    CareerAnalysis, InterviewQuestion, InterviewSet, LearningPath, Recommendation,
    ResumeAnalysis, Roadmap,
};
use crate::coach::orchestrator::{attempt_structured, attempt_text, with_fallback, Source};
use crate::coach::prompts;
use crate::coach::recommender::recommend_careers;
use crate::coach::requests::{
    AssessmentRequest, ChatRequest, CoachingMode, Difficulty, InterviewType, LearningPathRequest,
    MockInterviewRequest, ResumeAnalysisRequest, RoadmapRequest,
};
use crate::coach::resume::analyze_resume;
use crate::coach::roadmap::fallback_roadmap;
use crate::coach::validation::ValidatedJson;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Success envelope shared by every compute endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
    pub source: Source,
}

impl<T> ApiResponse<T> {
    fn new((payload, source): (T, Source)) -> Json<Self> {
        Json(Self {
            success: true,
            payload,
            source,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    pub response: String,
    pub mode: CoachingMode,
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub role: String,
    pub experience: String,
    pub interview_type: InterviewType,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub estimated_duration: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewPayload {
    pub questions: Vec<InterviewQuestion>,
    pub session_info: SessionInfo,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisPayload {
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathPayload {
    pub learning_path: LearningPath,
}

#[derive(Debug, Serialize)]
pub struct RoadmapPayload {
    pub roadmap: Roadmap,
}

#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub catalog: FeatureCatalog,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai-career-coach/chat
///
/// Coaching reply in the requested mode. The fallback reply is never empty.
pub async fn handle_chat(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ApiResponse<ChatPayload>>, AppError> {
    let (prompt, context) = prompts::chat_prompt(&request);
    let attempt = attempt_text(state.ai.as_ref(), &prompt, &context).await;
    let (response, source) = with_fallback("chat", attempt, async {
        Ok(fallback_reply(&request.message, request.mode))
    })
    .await?;

    Ok(ApiResponse::new((
        ChatPayload {
            response,
            mode: request.mode,
            suggestions: suggestions(request.mode),
            timestamp: Utc::now(),
        },
        source,
    )))
}

/// POST /api/v1/ai-career-coach/mock-interview
///
/// Question set plus session metadata. AI output is cut to the requested count.
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MockInterviewRequest>,
) -> Result<Json<ApiResponse<MockInterviewPayload>>, AppError> {
    let (prompt, context) = prompts::interview_prompt(&request);
    let attempt = attempt_structured::<InterviewSet>(state.ai.as_ref(), &prompt, &context)
        .await
        .map(|set| normalize_questions(set.questions, &request));
    let (questions, source) = with_fallback("mock-interview", attempt, async {
        Ok(fallback_questions(&request))
    })
    .await?;

    let session_info = SessionInfo {
        session_id: Uuid::new_v4(),
        role: request.role.trim().to_string(),
        experience: request.experience.trim().to_string(),
        interview_type: request.interview_type,
        difficulty: request.difficulty,
        question_count: questions.len(),
        estimated_duration: format!("{} minutes", estimated_minutes(&questions)),
        created_at: Utc::now(),
    };

    Ok(ApiResponse::new((
        MockInterviewPayload {
            questions,
            session_info,
        },
        source,
    )))
}

/// Truncates to the requested count, renumbers, and fills a missing difficulty.
fn normalize_questions(
    mut questions: Vec<InterviewQuestion>,
    request: &MockInterviewRequest,
) -> Vec<InterviewQuestion> {
    questions.truncate(request.question_count());
    for (i, question) in questions.iter_mut().enumerate() {
        question.id = i as u32 + 1;
        if question.difficulty.trim().is_empty() {
            question.difficulty = request.difficulty.as_str().to_string();
        }
    }
    questions
}

/// POST /api/v1/ai-career-coach/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResumeAnalysisRequest>,
) -> Result<Json<ApiResponse<ResumeAnalysisPayload>>, AppError> {
    let (prompt, context) = prompts::resume_prompt(&request);
    let attempt = attempt_structured::<ResumeAnalysis>(state.ai.as_ref(), &prompt, &context).await;
    let (analysis, source) = with_fallback("analyze-resume", attempt, async {
        Ok(analyze_resume(&request))
    })
    .await?;

    Ok(ApiResponse::new((ResumeAnalysisPayload { analysis }, source)))
}

/// POST /api/v1/ai-career-coach/learning-path
pub async fn handle_learning_path(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LearningPathRequest>,
) -> Result<Json<ApiResponse<LearningPathPayload>>, AppError> {
    let (prompt, context) = prompts::learning_path_prompt(&request);
    let attempt = attempt_structured::<LearningPath>(state.ai.as_ref(), &prompt, &context).await;
    let (learning_path, source) = with_fallback(
        "learning-path",
        attempt,
        fallback_learning_path(state.catalog.as_ref(), &request),
    )
    .await?;

    Ok(ApiResponse::new((LearningPathPayload { learning_path }, source)))
}

/// POST /api/v1/ai-career-coach/analyze
///
/// Career recommendations from a free-form assessment. The fallback returns at
/// most three catalog-backed recommendations.
pub async fn handle_analyze(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AssessmentRequest>,
) -> Result<Json<ApiResponse<CareerAnalysis>>, AppError> {
    let (prompt, context) = prompts::assessment_prompt(&request);
    let attempt = attempt_structured::<CareerAnalysis>(state.ai.as_ref(), &prompt, &context)
        .await
        .map(|mut analysis| {
            if analysis.summary.trim().is_empty() {
                analysis.summary = summarize(&analysis.recommendations, &request.interests);
            }
            analysis
        });
    let (analysis, source) = with_fallback("analyze", attempt, async {
        let text = request.free_text();
        let recommendations =
            recommend_careers(state.catalog.as_ref(), state.jitter.as_ref(), &text).await?;
        Ok(CareerAnalysis {
            summary: summarize(&recommendations, &text),
            recommendations,
        })
    })
    .await?;

    Ok(ApiResponse::new((analysis, source)))
}

fn summarize(recommendations: &[Recommendation], user_text: &str) -> String {
    let titles: Vec<&str> = recommendations.iter().map(|r| r.title.as_str()).collect();
    let (listed, verb) = match titles.as_slice() {
        [] => {
            return "We could not find matching careers yet. Tell us more about what you \
                    enjoy and the skills you have."
                .to_string()
        }
        [only] => (only.to_string(), "is"),
        [rest @ .., last] => (format!("{} and {last}", rest.join(", ")), "are"),
    };
    match detect_bucket(user_text) {
        Some(bucket) => format!(
            "Based on your interest in {}, {listed} {verb} a strong match.",
            bucket.label
        ),
        None => format!("Based on your profile, {listed} {verb} worth exploring."),
    }
}

/// POST /api/v1/ai-career-coach/roadmap
///
/// Phased roadmap for a role. Unknown roles get the generic three-phase roadmap.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RoadmapRequest>,
) -> Result<Json<ApiResponse<RoadmapPayload>>, AppError> {
    let (prompt, context) = prompts::roadmap_prompt(&request);
    let attempt = attempt_structured::<Roadmap>(state.ai.as_ref(), &prompt, &context).await;
    let (roadmap, source) = with_fallback(
        "roadmap",
        attempt,
        fallback_roadmap(state.catalog.as_ref(), request.role.trim()),
    )
    .await?;

    Ok(ApiResponse::new((RoadmapPayload { roadmap }, source)))
}

/// GET /api/v1/ai-career-coach/features
pub async fn handle_features() -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        success: true,
        catalog: feature_catalog(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::memory::{data_scientist_path, sample_options, InMemoryCatalog};
    use crate::coach::recommender::NoJitter;
    use crate::config::Config;
    use crate::llm_client::fake::ScriptedProvider;
    use crate::llm_client::{AiProvider, DisabledProvider};
    use crate::routes::build_router;

    const PREFIX: &str = "/api/v1/ai-career-coach";

    fn app_with(ai: Arc<dyn AiProvider>, catalog: InMemoryCatalog) -> Router {
        build_router(AppState {
            ai,
            catalog: Arc::new(catalog),
            jitter: Arc::new(NoJitter),
            config: Config::for_tests(),
        })
    }

    fn fallback_app() -> Router {
        let catalog = InMemoryCatalog {
            options: sample_options(),
            paths: vec![data_scientist_path(true)],
            unavailable: false,
        };
        app_with(Arc::new(ScriptedProvider::failing()), catalog)
    }

    async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(format!("{PREFIX}{path}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // ── chat ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_chat_fallback_is_never_empty() {
        let (status, body) = post(
            fallback_app(),
            "/chat",
            json!({"message": "How do I get into programming?", "mode": "interview"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["mode"], "interview");
        assert!(!body["response"].as_str().unwrap().trim().is_empty());
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chat_uses_ai_reply_and_history() {
        let ai = Arc::new(ScriptedProvider::replying("Focus on SQL first."));
        let app = app_with(ai.clone(), InMemoryCatalog::default());
        let (status, body) = post(
            app,
            "/chat",
            json!({
                "message": "What next?",
                "conversationHistory": [
                    {"role": "user", "content": "I like data"},
                    {"role": "assistant", "content": "Great!"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "ai");
        assert_eq!(body["response"], "Focus on SQL first.");
        assert_eq!(body["mode"], "general");
        assert_eq!(ai.last_context().unwrap().history.len(), 2);
    }

    #[tokio::test]
    async fn test_chat_without_provider_configured() {
        let app = app_with(Arc::new(DisabledProvider), InMemoryCatalog::default());
        let (status, body) = post(app, "/chat", json!({"message": "hello"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        let (status, body) = post(fallback_app(), "/chat", json!({"message": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["errors"][0]["field"], "message");
    }

    #[tokio::test]
    async fn test_chat_rejects_bad_history_turn_on_its_field() {
        let (status, body) = post(
            fallback_app(),
            "/chat",
            json!({"message": "hi", "conversationHistory": [{"role": "system", "content": "x"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["errors"][0]["field"], "conversationHistory");
    }

    // ── mock interview ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_mock_interview_fallback_scenario() {
        let (status, body) = post(
            fallback_app(),
            "/mock-interview",
            json!({
                "role": "Backend Engineer",
                "experience": "2 years",
                "interviewType": "technical",
                "difficulty": "intermediate"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let questions = body["questions"].as_array().unwrap();
        assert!(!questions.is_empty());
        let info = &body["sessionInfo"];
        assert_eq!(info["questionCount"], questions.len());
        assert_eq!(info["role"], "Backend Engineer");
        assert_eq!(info["interviewType"], "technical");
        assert_eq!(info["estimatedDuration"], "25 minutes");
        assert!(Uuid::parse_str(info["sessionId"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_mock_interview_ai_output_truncated_to_requested_count() {
        let questions: Vec<Value> = (0..8)
            .map(|i| json!({"question": format!("Question {i}?"), "type": "technical"}))
            .collect();
        let reply = json!({ "questions": questions }).to_string();
        let app = app_with(
            Arc::new(ScriptedProvider::replying(reply)),
            InMemoryCatalog::default(),
        );
        let (status, body) = post(
            app,
            "/mock-interview",
            json!({
                "role": "QA Engineer",
                "experience": "1 year",
                "interviewType": "technical",
                "difficulty": "beginner",
                "questionCount": 3
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "ai");
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(body["sessionInfo"]["questionCount"], 3);
        assert_eq!(questions[2]["id"], 3);
        assert_eq!(questions[0]["difficulty"], "beginner");
    }

    #[tokio::test]
    async fn test_mock_interview_rejects_unknown_type() {
        let (status, body) = post(
            fallback_app(),
            "/mock-interview",
            json!({"role": "QA", "experience": "1 year", "interviewType": "quiz", "difficulty": "beginner"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "interviewType");
    }

    // ── resume ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_short_resume_is_rejected() {
        let (status, body) = post(
            fallback_app(),
            "/analyze-resume",
            json!({ "resumeText": "x".repeat(40) }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "resumeText");
    }

    #[tokio::test]
    async fn test_resume_fallback_when_ai_returns_garbage() {
        let app = app_with(
            Arc::new(ScriptedProvider::replying("I'd rather not {")),
            InMemoryCatalog::default(),
        );
        let resume = "Experience\n- Built dashboards used by 40 analysts\n- Reduced report time by 30%\nSkills\nSQL, Python";
        let (status, body) = post(app, "/analyze-resume", json!({ "resumeText": resume })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let score = body["analysis"]["overallScore"].as_u64().unwrap();
        assert!(score <= 100);
        assert!(body["analysis"]["sectionFeedback"].is_array());
    }

    // ── learning path ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_learning_path_requires_current_skills() {
        let (status, body) = post(
            fallback_app(),
            "/learning-path",
            json!({"currentSkills": [], "targetRole": "Data Scientist"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "currentSkills");
    }

    #[tokio::test]
    async fn test_learning_path_fallback_from_catalog() {
        let (status, body) = post(
            fallback_app(),
            "/learning-path",
            json!({"currentSkills": ["Python"], "targetRole": "Data Scientist", "hoursPerWeek": 10}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let path = &body["learningPath"];
        assert_eq!(path["targetRole"], "Data Scientist");
        assert_eq!(path["weeklyCommitment"], "10 hours per week");
        assert!(!path["skillGaps"].as_array().unwrap().contains(&json!("Python")));
    }

    // ── analyze ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_analyze_fallback_recommendations() {
        let (status, body) = post(
            fallback_app(),
            "/analyze",
            json!({"interests": "I love programming and marketing", "skills": ["JavaScript"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let recs = body["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty() && recs.len() <= 3);
        for rec in recs {
            let pct = rec["match_percentage"].as_u64().unwrap();
            assert!((70..=95).contains(&pct));
        }
        assert_eq!(recs[0]["match_percentage"], 95);
        assert!(body["summary"]
            .as_str()
            .unwrap()
            .starts_with("Based on your interest in technology and software"));
    }

    #[tokio::test]
    async fn test_analyze_with_empty_catalog_returns_no_recommendations() {
        let app = app_with(Arc::new(ScriptedProvider::failing()), InMemoryCatalog::default());
        let (status, body) = post(app, "/analyze", json!({"interests": "gardening"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"], json!([]));
        assert!(!body["summary"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_database_outage_is_500() {
        let catalog = InMemoryCatalog {
            unavailable: true,
            ..Default::default()
        };
        let app = app_with(Arc::new(ScriptedProvider::failing()), catalog);
        let (status, body) = post(app, "/analyze", json!({"interests": "data science"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "A database error occurred");
    }

    #[tokio::test]
    async fn test_analyze_uses_valid_ai_payload() {
        let reply = r#"Sure! {"recommendations": [{
            "title": "Data Analyst", "description": "d", "match_percentage": 91,
            "salary_range": "$60,000 - $90,000", "growth_outlook": "Strong",
            "key_skills": ["SQL"], "daily_tasks": [], "learning_path": [],
            "time_to_proficiency": "6 months", "difficulty_level": "beginner",
            "industry_demand": "High", "reasons": ["Likes numbers"]
        }]}"#;
        let app = app_with(
            Arc::new(ScriptedProvider::replying(reply)),
            InMemoryCatalog::default(),
        );
        let (status, body) = post(app, "/analyze", json!({"interests": "numbers and statistics"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "ai");
        assert_eq!(body["recommendations"][0]["title"], "Data Analyst");
        assert!(body["summary"].as_str().unwrap().contains("Data Analyst"));
    }

    // ── roadmap ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_roadmap_unknown_role_gets_generic_phases() {
        let (status, body) = post(fallback_app(), "/roadmap", json!({"role": "Astronaut"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let phases = body["roadmap"]["phases"].as_array().unwrap();
        let titles: Vec<_> = phases.iter().map(|p| p["title"].as_str().unwrap()).collect();
        assert_eq!(
            titles,
            vec!["Foundation", "Skill Development", "Professional Readiness"]
        );
    }

    #[tokio::test]
    async fn test_roadmap_known_role_uses_catalog_path() {
        let (status, body) = post(fallback_app(), "/roadmap", json!({"role": "data scientist"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"]["phases"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let request = Request::builder()
            .method("POST")
            .uri(format!("{PREFIX}/roadmap"))
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = fallback_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ── features ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_features_listing() {
        let request = Request::builder()
            .uri(format!("{PREFIX}/features"))
            .body(Body::empty())
            .unwrap();
        let response = fallback_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["features"].as_array().unwrap().len(), 6);
        assert_eq!(body["coachingModes"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_summary_lists_titles() {
        let rec = |title: &str| Recommendation {
            title: title.to_string(),
            description: String::new(),
            match_percentage: 90,
            salary_range: String::new(),
            growth_outlook: String::new(),
            key_skills: vec![],
            daily_tasks: vec![],
            learning_path: vec![],
            time_to_proficiency: String::new(),
            difficulty_level: String::new(),
            industry_demand: String::new(),
            reasons: vec![],
        };
        let summary = summarize(&[rec("A"), rec("B"), rec("C")], "gardening");
        assert_eq!(summary, "Based on your profile, A, B and C are worth exploring.");
    }
}
