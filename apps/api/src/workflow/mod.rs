//! Client-side workflow orchestrator.
//!
//! Runs the fixed six-role roster against the agent endpoint: every role is
//! marked in-progress up front, each call is issued on its own task with a
//! staggered delay, and each role's slot is written exactly once by its own
//! task. A failed call is replaced by the canned per-role analysis, so a run
//! always finishes with six completed results and returns exactly once.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::agents::fallback::{mock_output, mock_questions};
use crate::agents::models::{AgentResponse, Question, UploadedFiles};
use crate::agents::roles::AgentRole;

/// Delay unit between successive agent calls. Purely a presentation device
/// so results appear one by one in the UI; it is not a rate limiter.
pub const DEFAULT_STAGGER: Duration = Duration::from_secs(2);

/// Per-role lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStatus {
    Pending,
    InProgress,
    Completed,
}

/// One role's slot in a workflow run.
#[derive(Debug, Clone, Serialize)]
pub struct AgentRun {
    pub role_id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub status: AgentStatus,
    pub output: String,
    pub questions: Vec<Question>,
    #[serde(skip)]
    role: AgentRole,
}

impl AgentRun {
    fn new(role: AgentRole) -> Self {
        Self {
            role_id: role.id(),
            name: role.name(),
            icon: role.icon(),
            color: role.color(),
            status: AgentStatus::Pending,
            output: String::new(),
            questions: Vec::new(),
            role,
        }
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    /// Status transitions are forward-only; no regression, no cancellation.
    fn advance(&mut self, next: AgentStatus) {
        debug_assert!(next >= self.status);
        self.status = next;
    }
}

/// Builds the six-role pending roster for a fresh session.
pub fn initialize_agents() -> Vec<AgentRun> {
    AgentRole::ROSTER.into_iter().map(AgentRun::new).collect()
}

/// Issues the per-role endpoint calls and merges the results.
#[derive(Clone)]
pub struct WorkflowClient {
    http: Client,
    base_url: String,
    stagger: Duration,
}

impl WorkflowClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            stagger: DEFAULT_STAGGER,
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Runs every agent to completion. The i-th call is scheduled after
    /// `(i+1) * stagger`. Returns once all agents are completed, success or
    /// fallback alike.
    pub async fn run(
        &self,
        mut agents: Vec<AgentRun>,
        company: &str,
        files: &UploadedFiles,
    ) -> Vec<AgentRun> {
        for agent in &mut agents {
            agent.advance(AgentStatus::InProgress);
            agent.output.clear();
            agent.questions.clear();
        }

        let url = format!("{}/api/agent", self.base_url);
        let mut set: JoinSet<(usize, String, Vec<Question>)> = JoinSet::new();

        for (index, agent) in agents.iter().enumerate() {
            let role = agent.role;
            let http = self.http.clone();
            let url = url.clone();
            let company = company.to_string();
            let files = files.clone();
            let delay = self.stagger * (index as u32 + 1);

            set.spawn(async move {
                tokio::time::sleep(delay).await;
                match call_agent(&http, &url, role, &company, &files).await {
                    Ok(response) => {
                        // The endpoint may legitimately return no questions;
                        // substitute the canned list so the UI always has some.
                        let questions = if response.questions.is_empty() {
                            mock_questions(role)
                        } else {
                            response.questions
                        };
                        (index, response.output, questions)
                    }
                    Err(e) => {
                        warn!("agent call failed for {}: {e}", role.id());
                        (index, mock_output(role, &company), mock_questions(role))
                    }
                }
            });
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, output, questions)) => {
                    let agent = &mut agents[index];
                    agent.output = output;
                    agent.questions = questions;
                    agent.advance(AgentStatus::Completed);
                }
                Err(e) => warn!("agent task failed to join: {e}"),
            }
        }

        // A joined-with-error task (cancelled or panicked) must not leave a
        // role unfinished; its slot gets the canned content like any failure.
        for agent in &mut agents {
            if agent.status != AgentStatus::Completed {
                agent.output = mock_output(agent.role, company);
                agent.questions = mock_questions(agent.role);
                agent.advance(AgentStatus::Completed);
            }
        }

        info!("workflow completed for {} agents", agents.len());
        agents
    }
}

async fn call_agent(
    http: &Client,
    url: &str,
    role: AgentRole,
    company: &str,
    files: &UploadedFiles,
) -> anyhow::Result<AgentResponse> {
    let body = serde_json::json!({
        "agentId": role.id(),
        "company": company,
        "uploadedFiles": files,
    });
    let response = http.post(url).json(&body).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("agent API failed: {}", response.status());
    }
    Ok(response.json::<AgentResponse>().await?)
}
