//! Prompt templates.
//!
//! Prompts are the only coupling between this system and the oracle's
//! behavior; keep them together so wording changes are reviewable in one
//! place. None of these promise a parseable response — consumers store the
//! completion verbatim.

/// Character budget for document-level prompts. Long uploads are truncated
/// rather than rejected; the summary is best-effort anyway.
pub const DOCUMENT_PROMPT_LIMIT: usize = 2000;

/// Character budget for resume analysis prompts.
pub const RESUME_PROMPT_LIMIT: usize = 3000;

/// First `max` characters of `text`, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Summarize an uploaded document.
pub fn document_summary(text: &str) -> String {
    format!(
        "Summarize this document:\n{}",
        truncate_chars(text, DOCUMENT_PROMPT_LIMIT)
    )
}

/// Extract the vendor/supplier name from an invoice.
pub fn finance_vendor(text: &str) -> String {
    format!("Extract the vendor/supplier name from this invoice:\n{text}\nVendor:")
}

/// Extract the parties to a contract.
pub fn legal_parties(text: &str) -> String {
    format!("Extract parties in this contract:\n{text}\nParties:")
}

/// Classify a client complaint. The response is *requested* as JSON but
/// never validated downstream.
pub fn support_classification(text: &str) -> String {
    format!(
        "Classify the following client complaint:\n\
         Text: {text}\n\
         Return JSON with 'category' (Refund/Delay/Delivery/Other) and 'priority' (Low/Medium/High)."
    )
}

/// Sentiment + category analysis for employee feedback.
pub fn hr_feedback(text: &str) -> String {
    format!(
        "Analyze employee feedback:\n\
         {text}\n\
         Return JSON with 'sentiment' (Positive/Negative/Neutral) and 'category' (Workload, Manager support, Pay, Other)."
    )
}

/// Summarize an IT ticket (reporter context included by the caller).
pub fn ticket_summary(full_description: &str) -> String {
    format!(
        "Summarize this IT ticket: {}",
        truncate_chars(full_description, DOCUMENT_PROMPT_LIMIT)
    )
}

/// Answer a question against the stored document summaries.
pub fn document_query(all_summaries: &str, question: &str) -> String {
    format!("Answer this based on docs:\n{all_summaries}\nQuestion: {question}")
}

/// Answer a question against a user's ticket summaries.
pub fn ticket_query(summaries: &str, question: &str) -> String {
    format!("User submitted IT tickets summaries:\n{summaries}\nQuestion: {question}")
}

/// Extract a structured candidate profile from resume text.
pub fn resume_skills(text: &str) -> String {
    format!(
        "Analyze this resume and extract:\n\
         1. Candidate name\n\
         2. Years of experience\n\
         3. Technical skills (programming languages, tools, frameworks)\n\
         4. Soft skills (communication, leadership, etc.)\n\
         5. Education background\n\
         6. Previous job roles\n\
         \n\
         Resume: {}\n\
         \n\
         Return as JSON format:\n\
         {{\n\
         \"name\": \"candidate name\",\n\
         \"experience_years\": number,\n\
         \"technical_skills\": [\"skill1\", \"skill2\"],\n\
         \"soft_skills\": [\"skill1\", \"skill2\"],\n\
         \"education\": \"degree and institution\",\n\
         \"previous_roles\": [\"role1\", \"role2\"]\n\
         }}",
        truncate_chars(text, RESUME_PROMPT_LIMIT)
    )
}

/// Match an analyzed candidate profile against the role catalog.
pub fn resume_job_matching(skills_analysis: &str) -> String {
    format!(
        "Based on this candidate profile, analyze their fit for different job roles:\n\
         \n\
         {skills_analysis}\n\
         \n\
         Available job roles:\n\
         1. Frontend Developer (React, Vue, Angular, JavaScript, HTML, CSS)\n\
         2. Backend Developer (Python, Java, Node.js, SQL, APIs)\n\
         3. Full Stack Developer (Frontend + Backend skills)\n\
         4. Data Analyst (SQL, Python, Excel, Tableau, PowerBI)\n\
         5. DevOps Engineer (Docker, Kubernetes, AWS, CI/CD)\n\
         6. UI/UX Designer (Figma, Adobe, User Research, Prototyping)\n\
         7. Project Manager (Agile, Scrum, Leadership, Communication)\n\
         8. Business Analyst (Requirements, Documentation, Stakeholder Management)\n\
         9. QA Engineer (Testing, Automation, Selenium, JUnit)\n\
         10. Support Engineer (Customer Service, Technical Support, Troubleshooting)\n\
         11. Sales Executive (Sales, CRM, Communication, Negotiation)\n\
         12. Marketing Specialist (Digital Marketing, SEO, Social Media, Analytics)\n\
         13. Finance Analyst (Accounting, Excel, Financial Modeling, Analysis)\n\
         14. HR Specialist (Recruitment, Employee Relations, HRIS, Compliance)\n\
         15. Operations Manager (Process Improvement, Team Management, Logistics)\n\
         \n\
         Return ONLY a JSON array with this exact format:\n\
         [\n\
         {{\"role\": \"Role Name\", \"match\": 85, \"fit\": \"High\"}},\n\
         {{\"role\": \"Role Name\", \"match\": 72, \"fit\": \"Medium\"}}\n\
         ]\n\
         \n\
         Rules:\n\
         - Return maximum 3 best-fit roles\n\
         - Match percentage should be 0-100\n\
         - Fit should be \"High\" (80+), \"Medium\" (60-79), or \"Low\" (below 60)\n\
         - Only return the JSON array, no other text"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹");
        assert_eq!(truncate_chars("short", 2000), "short");
    }

    #[test]
    fn document_summary_truncates_long_text() {
        let long = "x".repeat(5000);
        let prompt = document_summary(&long);
        assert!(prompt.len() < 2100);
        assert!(prompt.starts_with("Summarize this document:\n"));
    }

    #[test]
    fn vendor_prompt_ends_with_completion_cue() {
        let prompt = finance_vendor("Invoice from ACME Corp");
        assert!(prompt.ends_with("Vendor:"));
        assert!(prompt.contains("ACME Corp"));
    }

    #[test]
    fn support_prompt_requests_priority_levels() {
        let prompt = support_classification("late delivery");
        assert!(prompt.contains("'priority' (Low/Medium/High)"));
    }
}
