//! The closed roster of analysis roles.
//!
//! Six personas each produce one section of the proposal analysis. Unknown
//! wire identifiers resolve to `Generic` so a stray client never sees an
//! error for a role it invented.

/// One of the six analysis personas, plus a generic catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    BidManager,
    LegalAnalyst,
    ProductSpecialist,
    RiskAssessor,
    FinancialAnalyst,
    CriticalThinker,
    Generic,
}

impl AgentRole {
    /// The fixed six-role roster, in presentation order.
    /// `Generic` is a resolution fallback only and is never part of it.
    pub const ROSTER: [AgentRole; 6] = [
        AgentRole::BidManager,
        AgentRole::LegalAnalyst,
        AgentRole::ProductSpecialist,
        AgentRole::RiskAssessor,
        AgentRole::FinancialAnalyst,
        AgentRole::CriticalThinker,
    ];

    /// Resolves a wire identifier. Unknown ids fall back to `Generic`.
    pub fn from_id(id: &str) -> AgentRole {
        match id {
            "bidManager" => AgentRole::BidManager,
            "legalAnalyst" => AgentRole::LegalAnalyst,
            "productSpecialist" => AgentRole::ProductSpecialist,
            "riskAssessor" => AgentRole::RiskAssessor,
            "financialAnalyst" => AgentRole::FinancialAnalyst,
            "criticalThinker" => AgentRole::CriticalThinker,
            _ => AgentRole::Generic,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            AgentRole::BidManager => "bidManager",
            AgentRole::LegalAnalyst => "legalAnalyst",
            AgentRole::ProductSpecialist => "productSpecialist",
            AgentRole::RiskAssessor => "riskAssessor",
            AgentRole::FinancialAnalyst => "financialAnalyst",
            AgentRole::CriticalThinker => "criticalThinker",
            AgentRole::Generic => "generic",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::BidManager => "Bid Manager",
            AgentRole::LegalAnalyst => "Legal Analyst",
            AgentRole::ProductSpecialist => "Product Specialist",
            AgentRole::RiskAssessor => "Risk Assessor",
            AgentRole::FinancialAnalyst => "Financial Analyst",
            AgentRole::CriticalThinker => "Critical Thinker",
            AgentRole::Generic => "Analyst",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AgentRole::BidManager => "🎯",
            AgentRole::LegalAnalyst => "⚖️",
            AgentRole::ProductSpecialist => "🔬",
            AgentRole::RiskAssessor => "📊",
            AgentRole::FinancialAnalyst => "💰",
            AgentRole::CriticalThinker => "🤔",
            AgentRole::Generic => "📋",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AgentRole::BidManager => "#ff6b35",
            AgentRole::LegalAnalyst => "#4a90e2",
            AgentRole::ProductSpecialist => "#2ecc71",
            AgentRole::RiskAssessor => "#e74c3c",
            AgentRole::FinancialAnalyst => "#9b59b6",
            AgentRole::CriticalThinker => "#f1c40f",
            AgentRole::Generic => "#888888",
        }
    }

    /// The section title used in both the prompt and the fallback output.
    pub fn title(&self) -> &'static str {
        match self {
            AgentRole::BidManager => "BID STRATEGY ANALYSIS",
            AgentRole::LegalAnalyst => "LEGAL RISK ASSESSMENT",
            AgentRole::ProductSpecialist => "TECHNICAL CAPABILITY ASSESSMENT",
            AgentRole::RiskAssessor => "RISK ANALYSIS",
            AgentRole::FinancialAnalyst => "FINANCIAL ANALYSIS",
            AgentRole::CriticalThinker => "CRITICAL CONSIDERATIONS",
            AgentRole::Generic => "ANALYSIS",
        }
    }

    /// The focus phrase framing what this role should attend to.
    pub fn focus(&self) -> &'static str {
        match self {
            AgentRole::BidManager => {
                "win themes, competitive positioning, and proposal strategy"
            }
            AgentRole::LegalAnalyst => "contractual risks, compliance, IP, and mitigation",
            AgentRole::ProductSpecialist => {
                "solution fit, architecture, scalability, security, and implementation plan"
            }
            AgentRole::RiskAssessor => "project risks, likelihood/impact, and mitigations",
            AgentRole::FinancialAnalyst => "cost structure, margins, ROI, and payment terms",
            AgentRole::CriticalThinker => {
                "assumptions, blind spots, decision risks, and recommendations"
            }
            AgentRole::Generic => "general analysis",
        }
    }

    /// Per-role expected output sections, embedded in the prompt so the model
    /// mirrors the HTML shape the frontend renders. Empty for `Generic`.
    pub fn expected_sections(&self) -> &'static str {
        match self {
            AgentRole::BidManager => {
                "Expected Sections (HTML):\n\
                 <strong>🎯 BID STRATEGY ANALYSIS</strong><br/>\n\
                 • Key Win Themes Identified (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Competitive Positioning:</strong><br/>\n\
                 • Guidance on emphasis (bullets)"
            }
            AgentRole::LegalAnalyst => {
                "Expected Sections (HTML):\n\
                 <strong>⚖️ LEGAL RISK ASSESSMENT</strong><br/>\n\
                 • Contract Analysis (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Risk Mitigation:</strong><br/>\n\
                 • Mitigation items (bullets)"
            }
            AgentRole::ProductSpecialist => {
                "Expected Sections (HTML):\n\
                 <strong>🔬 TECHNICAL CAPABILITY ASSESSMENT</strong><br/>\n\
                 • Solution Fit points (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Implementation Plan:</strong><br/>\n\
                 • Phase breakdown (bullets)"
            }
            AgentRole::RiskAssessor => {
                "Expected Sections (HTML):\n\
                 <strong>📊 RISK ANALYSIS</strong><br/>\n\
                 • Project Risks with levels (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Mitigation Strategies:</strong><br/>\n\
                 • Strategies (bullets)"
            }
            AgentRole::FinancialAnalyst => {
                "Expected Sections (HTML):\n\
                 <strong>💰 FINANCIAL ANALYSIS</strong><br/>\n\
                 • Cost Structure with amounts (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Profitability:</strong><br/>\n\
                 • Margin, ROI, Break-even (bullets)"
            }
            AgentRole::CriticalThinker => {
                "Expected Sections (HTML):\n\
                 <strong>🤔 CRITICAL CONSIDERATIONS</strong><br/>\n\
                 • Key Questions (bullets)<br/>\n\
                 <br/>\n\
                 <strong>Recommendations:</strong><br/>\n\
                 • Actionable recommendations (bullets)"
            }
            AgentRole::Generic => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_six_distinct_roles() {
        assert_eq!(AgentRole::ROSTER.len(), 6);
        for role in AgentRole::ROSTER {
            assert_ne!(role, AgentRole::Generic);
        }
    }

    #[test]
    fn test_from_id_roundtrip() {
        for role in AgentRole::ROSTER {
            assert_eq!(AgentRole::from_id(role.id()), role);
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_generic() {
        assert_eq!(AgentRole::from_id("quantumAnalyst"), AgentRole::Generic);
        assert_eq!(AgentRole::from_id(""), AgentRole::Generic);
    }

    #[test]
    fn test_roster_roles_have_sections() {
        for role in AgentRole::ROSTER {
            assert!(!role.expected_sections().is_empty());
            assert!(!role.title().is_empty());
            assert!(!role.focus().is_empty());
        }
    }
}
