use std::path::Path;

use crate::domain::{validate_records, DomainError, FaqRecord};

const BUILTIN: &[(&str, &str)] = &[
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient’s eligibility and benefits information in real-time, eliminating manual data entry errors and reducing claim rejections.",
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, reducing manual intervention, and accelerating reimbursements.",
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, accurate reconciliation of payments and reducing administrative burden.",
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to streamline healthcare processes. These include Eligibility Verification (EVA), Claims Processing (CAM), and Payment Posting (PHIL), among others.",
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, improve operational efficiency, and reduce errors in critical processes like claims management and payment posting.",
    ),
];

/// The compiled-in knowledge base.
pub fn builtin_records() -> Vec<FaqRecord> {
    BUILTIN
        .iter()
        .map(|(question, answer)| FaqRecord::new(*question, *answer))
        .collect()
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<FaqRecord>, DomainError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::config(format!("{}: {e}", path.display())))?;
    parse_records(&raw)
}

pub fn parse_records(raw: &str) -> Result<Vec<FaqRecord>, DomainError> {
    let records: Vec<FaqRecord> =
        serde_yaml::from_str(raw).map_err(|e| DomainError::config(e.to_string()))?;
    validate_records(&records)?;
    Ok(records)
}

/// Records from `path` when given, the built-in set otherwise.
pub fn resolve_records(path: Option<&Path>) -> Result<Vec<FaqRecord>, DomainError> {
    match path {
        Some(path) => load_records(path),
        None => Ok(builtin_records()),
    }
}
