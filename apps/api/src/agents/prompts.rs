//! Prompt assembly for the agent endpoint.
//!
//! The user prompt mirrors what the frontend renders: role framing, the
//! upper-cased company, a file manifest, capped excerpts, the role's expected
//! HTML sections, and a strict-JSON instruction so the reply parses robustly.

use crate::agents::models::FileDescriptor;
use crate::agents::roles::AgentRole;

/// Instruction appended to every user prompt. The two keys are the whole
/// contract between the model and `parse_analysis`.
const JSON_OUTPUT_INSTRUCTION: &str =
    "Return STRICT JSON with keys: output_html (string), questions (array of \
     {id:string,text:string,priority:'high'|'medium'|'low'}). The HTML must use \
     <strong> for section headers and <br/> for line breaks, like the examples \
     in the app. Do not include backticks.";

pub fn build_system_prompt(agent_id: &str) -> String {
    format!(
        "You are an expert {agent_id} for proposal/RFP analysis. \
         Output succinct, helpful content."
    )
}

/// One `- name (size bytes)` line per file, `- none` for an empty group.
fn summarize(files: &[FileDescriptor]) -> String {
    if files.is_empty() {
        return "- none".to_string();
    }
    files
        .iter()
        .map(|f| match f.size {
            Some(size) => format!("- {} ({} bytes)", f.name, size),
            None => format!("- {}", f.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable manifest of both file groups, with counts.
pub fn build_files_summary(rfp: &[FileDescriptor], reference: &[FileDescriptor]) -> String {
    format!(
        "RFP Files ({}):\n{}\n\nReference Files ({}):\n{}",
        rfp.len(),
        summarize(rfp),
        reference.len(),
        summarize(reference)
    )
}

pub fn build_user_prompt(
    role: AgentRole,
    company: &str,
    context: Option<&str>,
    files_summary: &str,
    rfp_excerpts: &str,
    ref_excerpts: &str,
) -> String {
    let rfp_excerpts = if rfp_excerpts.is_empty() {
        "- none"
    } else {
        rfp_excerpts
    };

    format!(
        "Company: {company}\n\n\
         Role Title: {title}\n\
         Focus: {focus}\n\
         Context (optional): {context}\n\n\
         Uploaded Files Summary:\n{files_summary}\n\n\
         Uploaded Files Content Excerpts (truncated):\n{rfp_excerpts}\n\n{ref_excerpts}\n\n\
         {sections}\n\n\
         {instruction}",
        company = company.to_uppercase(),
        title = role.title(),
        focus = role.focus(),
        context = context.filter(|c| !c.is_empty()).unwrap_or("N/A"),
        sections = role.expected_sections(),
        instruction = JSON_OUTPUT_INSTRUCTION,
    )
}
