//! POST /api/agent — the per-role analysis pipeline.
//!
//! Request shape is the only thing that can fail this endpoint: missing
//! `agentId` or `company` is a 400. Everything downstream (extraction, the
//! model call, response parsing) degrades to the deterministic fallback and
//! still returns 200, so role-level failures never reach the end user.

use axum::{extract::State, Json};
use tracing::{debug, warn};

use crate::agents::extract::{excerpt_blocks, ExcerptBudget};
use crate::agents::fallback::fallback_analysis;
use crate::agents::models::{parse_analysis, AgentRequest, AgentResponse};
use crate::agents::prompts::{build_files_summary, build_system_prompt, build_user_prompt};
use crate::agents::roles::AgentRole;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/agent
pub async fn handle_agent(
    State(state): State<AppState>,
    Json(req): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, AppError> {
    if req.agent_id.trim().is_empty() || req.company.trim().is_empty() {
        return Err(AppError::Validation(
            "agentId and company are required".to_string(),
        ));
    }

    let role = AgentRole::from_id(&req.agent_id);
    let files = req.uploaded_files.unwrap_or_default();

    if let Some(first) = files.rfp.first() {
        debug!(
            "received RFP file meta: name={}, mime={:?}, base64_len={}, has_text_content={}",
            first.name,
            first.mime,
            first.content_base64.as_deref().map_or(0, |b| b.len()),
            first.content.as_deref().is_some_and(|c| !c.is_empty()),
        );
    }

    let files_summary = build_files_summary(&files.rfp, &files.reference);

    let mut budget = ExcerptBudget::new(
        state.config.max_excerpt_per_file,
        state.config.max_excerpt_total,
    );
    let rfp_excerpts = excerpt_blocks("RFP", &files.rfp, &mut budget).await;
    let ref_excerpts = excerpt_blocks("REFERENCE", &files.reference, &mut budget).await;

    let system = build_system_prompt(&req.agent_id);
    let user = build_user_prompt(
        role,
        &req.company,
        req.context.as_deref(),
        &files_summary,
        &rfp_excerpts,
        &ref_excerpts,
    );

    let (output, questions) = match state.llm.call(&user, &system).await {
        Ok(reply) => match reply.text().and_then(parse_analysis) {
            Some(parsed) => parsed,
            None => {
                warn!("model reply for {} did not parse, using fallback", role.id());
                fallback_analysis(role, &req.company)
            }
        },
        Err(e) => {
            warn!("LLM call failed for {}: {e}", role.id());
            fallback_analysis(role, &req.company)
        }
    };

    Ok(Json(AgentResponse { output, questions }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_config() -> Config {
        Config {
            openai_api_key: "test-key".to_string(),
            openai_api_url: "http://127.0.0.1:9/unused".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            llm_max_attempts: 1,
            llm_timeout_secs: 5,
            max_excerpt_per_file: 1500,
            max_excerpt_total: 4000,
        }
    }

    fn test_state(api_url: &str) -> AppState {
        let config = Config {
            openai_api_url: api_url.to_string(),
            ..test_config()
        };
        AppState {
            llm: LlmClient::new(
                config.openai_api_key.clone(),
                config.openai_api_url.clone(),
                config.llm_timeout_secs,
                config.llm_max_attempts,
            ),
            config,
        }
    }

    /// Spawns a stub chat-completions server that always replies with the
    /// given message content, returning the full endpoint URL.
    async fn spawn_llm_stub(content: &'static str) -> String {
        let stub = Router::new().route(
            "/v1/chat/completions",
            post(move || async move {
                Json(json!({
                    "choices": [{ "message": { "content": content } }],
                    "usage": { "prompt_tokens": 10, "completion_tokens": 20 }
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    async fn post_agent(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/agent")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_missing_agent_id_is_400() {
        let app = build_router(test_state("http://127.0.0.1:9/unused"));
        let (status, body) = post_agent(app, r#"{"company":"orange"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn test_missing_company_is_400() {
        let app = build_router(test_state("http://127.0.0.1:9/unused"));
        let (status, body) = post_agent(app, r#"{"agentId":"bidManager"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_well_formed_reply_is_returned() {
        let url = spawn_llm_stub(
            r#"{"output_html":"<strong>BID STRATEGY ANALYSIS</strong><br/>Looks winnable.","questions":[{"id":"1","text":"Budget?","priority":"high"}]}"#,
        )
        .await;
        let app = build_router(test_state(&url));
        let (status, body) =
            post_agent(app, r#"{"agentId":"bidManager","company":"orange"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["output"].as_str().unwrap().contains("Looks winnable"));
        assert_eq!(body["questions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_parsed() {
        let url = spawn_llm_stub(
            "```json\n{\"output_html\":\"<strong>RISK ANALYSIS</strong>\",\"questions\":[]}\n```",
        )
        .await;
        let app = build_router(test_state(&url));
        let (status, body) =
            post_agent(app, r#"{"agentId":"riskAssessor","company":"kpn"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], "<strong>RISK ANALYSIS</strong>");
        assert_eq!(body["questions"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_agent_id_is_still_200() {
        let url = spawn_llm_stub(r#"{"output_html":"<strong>ANALYSIS</strong>","questions":[]}"#)
            .await;
        let app = build_router(test_state(&url));
        let (status, body) =
            post_agent(app, r#"{"agentId":"quantumAnalyst","company":"orange"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["output"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let url = spawn_llm_stub("Sure! Here is my detailed analysis in prose form.").await;
        let app = build_router(test_state(&url));
        let (status, body) =
            post_agent(app, r#"{"agentId":"financialAnalyst","company":"orange"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["output"].as_str().unwrap().contains("FINANCIAL ANALYSIS"));
        assert!(body["output"].as_str().unwrap().contains("ORANGE"));
        assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_model_falls_back() {
        // Nothing listens on this endpoint; the connect error must be absorbed.
        let app = build_router(test_state("http://127.0.0.1:9/v1/chat/completions"));
        let (status, body) =
            post_agent(app, r#"{"agentId":"legalAnalyst","company":"vodafone"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["output"].as_str().unwrap().contains("LEGAL RISK ASSESSMENT"));
        assert!(body["output"].as_str().unwrap().contains("VODAFONE"));
    }

    #[tokio::test]
    async fn test_every_roster_role_gets_an_analysis() {
        let url = spawn_llm_stub(r#"{"output_html":"<strong>OK</strong>","questions":[]}"#).await;
        let state = test_state(&url);
        for role in crate::agents::roles::AgentRole::ROSTER {
            let app = build_router(state.clone());
            let body = format!(r#"{{"agentId":"{}","company":"orange"}}"#, role.id());
            let (status, value) = post_agent(app, &body).await;
            assert_eq!(status, StatusCode::OK, "role {:?}", role);
            assert!(!value["output"].as_str().unwrap().is_empty());
            assert!(value["questions"].is_array());
        }
    }
}
