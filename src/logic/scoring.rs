use crate::types::{Agent, RankedAgent, ScoreCard, Tier};

/// Sum of the five readiness dimensions.
///
/// Missing or malformed dataset values already read as zero at the boundary,
/// so this is infallible. No upper clamp is applied; inflated sub-scores
/// carry through to the displayed total.
pub fn total_score(scores: &ScoreCard) -> f64 {
    scores.residency_hosting
        + scores.arabic_support
        + scores.deployment_model
        + scores.security_enterprise
        + scores.sector_fit
}

/// Annotates one agent with its total and tier for the current pass.
pub fn rank(agent: &Agent) -> RankedAgent<'_> {
    let total = total_score(&agent.scores);
    RankedAgent {
        agent,
        total,
        tier: Tier::from_total(total),
    }
}
