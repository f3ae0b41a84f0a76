use crate::types::{Agent, ComplianceFilter, Criteria};

/// AND-composition of the five independent criteria. An unset criterion is a
/// no-op, never a rejection.
pub fn matches(agent: &Agent, criteria: &Criteria) -> bool {
    matches_search(agent, &criteria.search)
        && matches_exact(&agent.category, &criteria.category)
        && matches_membership(&agent.deployment, &criteria.deployment)
        && matches_membership(&agent.sectors, &criteria.sector)
        && matches_compliance(agent, criteria.compliance)
}

/// Case-insensitive substring match. An empty or whitespace-only query
/// matches everything.
fn matches_search(agent: &Agent, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystack(agent).contains(&query)
}

/// Space-joined, lowercased concatenation of every searchable field, with
/// absent or empty fields skipped.
fn haystack(agent: &Agent) -> String {
    let mut parts: Vec<&str> = vec![agent.name.as_str(), agent.category.as_str()];
    parts.extend(agent.sectors.iter().map(String::as_str));
    parts.extend(agent.deployment.iter().map(String::as_str));
    if let Some(brief) = agent.sentinel_brief.as_deref() {
        parts.push(brief);
    }
    if let Some(use_case) = agent.recommended_use_case.as_deref() {
        parts.push(use_case);
    }
    parts.retain(|part| !part.is_empty());
    parts.join(" ").to_lowercase()
}

fn matches_exact(value: &str, filter: &str) -> bool {
    filter.is_empty() || value == filter
}

fn matches_membership(values: &[String], filter: &str) -> bool {
    filter.is_empty() || values.iter().any(|v| v == filter)
}

fn matches_compliance(agent: &Agent, filter: ComplianceFilter) -> bool {
    match filter {
        ComplianceFilter::Any => true,
        ComplianceFilter::Uae => agent.gcc.uae_compliant,
        ComplianceFilter::Saudi => agent.gcc.saudi_compliant,
        ComplianceFilter::Qatar => agent.gcc.qatar_sovereign_cloud_compatible,
    }
}
