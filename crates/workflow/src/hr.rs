//! HR feedback cascade.
//!
//! Ten keyword-group checks evaluated top-to-bottom with first-match-wins
//! semantics over the lowercased feedback text. Order matters for overlap:
//! "harassment" is checked before "positive", so feedback containing both
//! resolves to the harassment branch. Expressed as a literal table so the
//! rule set stays auditable; the checklists are contractual output, not
//! illustrative examples.

use intakeflow_core::WorkflowResult;

pub struct HrRule {
    pub outcome: &'static str,
    pub keywords: &'static [&'static str],
    pub checklist: &'static [&'static str],
}

pub const HR_CASCADE: &[HrRule] = &[
    // Resignation / exit feedback
    HrRule {
        outcome: "Employee Exit Process",
        keywords: &[
            "resign", "quit", "leaving", "exit", "termination", "fired", "dismissed",
            "separation",
        ],
        checklist: &[
            "Schedule exit interview within 48 hours",
            "Collect company assets and access cards",
            "Process final settlement and benefits",
            "Update HRIS and remove system access",
            "Conduct knowledge transfer session",
        ],
    },
    // Harassment / complaint issues
    HrRule {
        outcome: "Serious Complaint - Immediate Investigation",
        keywords: &[
            "harassment", "discrimination", "bullying", "inappropriate", "uncomfortable",
            "threat", "abuse", "hostile", "toxic",
        ],
        checklist: &[
            "Escalate to HRBP and Legal team immediately",
            "Document all details and evidence",
            "Schedule investigation meeting within 24 hours",
            "Notify senior management",
            "Consider temporary suspension if needed",
            "Follow company harassment policy strictly",
        ],
    },
    // Positive feedback
    HrRule {
        outcome: "Positive Feedback - Recognition",
        keywords: &[
            "positive", "good", "excellent", "satisfied", "appreciate", "benefits",
            "improved", "higher", "increased", "enhanced", "valued", "respected",
            "motivated", "engagement", "collaboration", "teamwork", "productivity",
            "retention", "innovation", "unity", "happy", "great", "wonderful", "amazing",
            "fantastic",
        ],
        checklist: &[
            "Archive positive feedback in HR system",
            "Share with relevant manager for recognition",
            "Consider for employee recognition program",
            "Document as positive culture indicator",
            "Follow up with employee to express appreciation",
        ],
    },
    // Urgent / negative issues
    HrRule {
        outcome: "Immediate Action Required",
        keywords: &[
            "urgent", "critical", "immediate", "high", "burnout", "frustration", "stress",
            "disengagement", "attrition", "overworked", "underappreciated", "fatigue",
            "exploited", "emergency", "crisis", "severe", "serious",
        ],
        checklist: &[
            "Escalate to HRBP within 24 hours",
            "Schedule urgent 1:1 meeting",
            "Document incident in HR system",
            "Notify relevant manager immediately",
            "Assess if immediate intervention needed",
            "Consider temporary workload adjustment",
        ],
    },
    // Salary / compensation issues
    HrRule {
        outcome: "Compensation Review Required",
        keywords: &[
            "salary", "pay", "compensation", "bonus", "increment", "raise", "wage",
            "money", "financial", "benefits", "insurance", "pension",
        ],
        checklist: &[
            "Review current compensation structure",
            "Compare with market benchmarks",
            "Schedule meeting with employee",
            "Consult with compensation team",
            "Prepare compensation proposal",
            "Follow up within 2 weeks",
        ],
    },
    // Work-life balance issues
    HrRule {
        outcome: "Work-Life Balance Review",
        keywords: &[
            "work-life", "balance", "overtime", "flexible", "remote", "home", "family",
            "personal", "time", "schedule", "hours",
        ],
        checklist: &[
            "Review current work schedule and policies",
            "Discuss flexible work options",
            "Assess workload distribution",
            "Consider remote work possibilities",
            "Schedule follow-up in 1 week",
            "Monitor improvement over next month",
        ],
    },
    // Training / development needs
    HrRule {
        outcome: "Training & Development Plan",
        keywords: &[
            "training", "development", "learning", "skill", "course", "certification",
            "growth", "career", "advancement", "promotion", "mentoring",
        ],
        checklist: &[
            "Assess current skill gaps",
            "Identify relevant training programs",
            "Create development plan",
            "Assign mentor if needed",
            "Schedule regular progress reviews",
            "Track development milestones",
        ],
    },
    // Moderate concerns
    HrRule {
        outcome: "Follow-up Needed",
        keywords: &[
            "negative", "concern", "issue", "problem", "imbalance", "frustration",
            "uneven", "workload", "morale", "low", "communication", "trust",
            "absenteeism", "dissatisfied", "unhappy", "disappointed",
        ],
        checklist: &[
            "Schedule 1:1 meeting this week",
            "Document concerns in HR system",
            "Identify root cause of issues",
            "Create action plan with employee",
            "Follow up in 2 weeks",
            "Monitor progress monthly",
        ],
    },
    // General feedback
    HrRule {
        outcome: "General Feedback - Process Review",
        keywords: &[
            "feedback", "suggestion", "idea", "improvement", "process", "system",
            "policy", "procedure", "workflow",
        ],
        checklist: &[
            "Review feedback for process improvements",
            "Share with relevant department heads",
            "Evaluate feasibility of suggestions",
            "Schedule feedback discussion",
            "Implement approved changes",
            "Follow up on implementation",
        ],
    },
];

/// Default branch when no cascade group matches.
pub const HR_DEFAULT: HrRule = HrRule {
    outcome: "Neutral Feedback - Monitor",
    keywords: &[],
    checklist: &[
        "Archive in HR system for reference",
        "Monitor for patterns or trends",
        "Include in quarterly HR review",
        "No immediate action required",
    ],
};

/// Run the cascade over raw feedback text.
pub fn evaluate(raw_text: &str) -> WorkflowResult {
    let lower = raw_text.to_lowercase();

    let rule = HR_CASCADE
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .unwrap_or(&HR_DEFAULT);

    WorkflowResult::fixed(rule.outcome, rule.checklist)
}
