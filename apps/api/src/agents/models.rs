//! Wire types for the agent endpoint, plus the lenient parser for the
//! model's strict-JSON reply.

use serde::{Deserialize, Serialize};

use crate::llm_client::strip_json_fences;

/// One uploaded file as described by the client. Content is best-effort:
/// inline text when the browser could read it as text, base64 bytes
/// otherwise, sometimes neither.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: Option<u64>,
    pub mime: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "contentBase64")]
    pub content_base64: Option<String>,
}

/// Uploaded files grouped by category.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UploadedFiles {
    #[serde(default)]
    pub rfp: Vec<FileDescriptor>,
    #[serde(default)]
    pub reference: Vec<FileDescriptor>,
}

/// Request body for `POST /api/agent`.
#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    #[serde(rename = "agentId", default)]
    pub agent_id: String,
    #[serde(default)]
    pub company: String,
    pub context: Option<String>,
    #[serde(rename = "uploadedFiles")]
    pub uploaded_files: Option<UploadedFiles>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A follow-up question an analyst would ask before committing to the bid.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub priority: Priority,
}

/// Response body for `POST /api/agent`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentResponse {
    pub output: String,
    pub questions: Vec<Question>,
}

/// Parses the model's reply into `(output_html, questions)`.
///
/// Strips surrounding code fences, then requires a JSON object with a
/// non-empty string `output_html`. `questions` is coerced to an empty list
/// when missing or not list-shaped. Returns `None` on any failure so the
/// caller can substitute the deterministic fallback.
pub fn parse_analysis(text: &str) -> Option<(String, Vec<Question>)> {
    let cleaned = strip_json_fences(text);
    let value: serde_json::Value = serde_json::from_str(cleaned).ok()?;

    let output = value.get("output_html")?.as_str()?.to_string();
    if output.trim().is_empty() {
        return None;
    }

    let questions = value
        .get("questions")
        .cloned()
        .map(|q| serde_json::from_value::<Vec<Question>>(q).unwrap_or_default())
        .unwrap_or_default();

    Some((output, questions))
}
