mod filters;
mod predicate;
mod scoring;
mod sorting;

pub use filters::build_filter_options;
pub use predicate::matches;
pub use scoring::{rank, total_score};
pub use sorting::sort_ranked;

use crate::render::{self, RenderOutput};
use crate::types::{Agent, Criteria, RankedAgent};

/// One full pass: filter, score, sort, render. Everything is recomputed from
/// the dataset; nothing carries over between passes.
pub fn run_query(agents: &[Agent], criteria: &Criteria) -> RenderOutput {
    let ranked = filter_and_rank(agents, criteria);
    RenderOutput {
        cards_html: render::render_cards(&ranked),
        count_label: render::count_label(ranked.len()),
        matched: ranked.len(),
    }
}

/// Filters and orders the dataset without rendering. Scoring runs before
/// sorting because the score sorts read the per-entry total.
pub fn filter_and_rank<'a>(agents: &'a [Agent], criteria: &Criteria) -> Vec<RankedAgent<'a>> {
    let mut ranked: Vec<RankedAgent<'a>> = agents
        .iter()
        .filter(|agent| matches(agent, criteria))
        .map(rank)
        .collect();
    sort_ranked(&mut ranked, criteria.sort);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Agent, ScoreCard, SortMode};

    // The two-agent scenario: A totals 20 in NLP/Cloud, B totals 12 in
    // Vision/On-Prem with a distinctive brief.
    fn agents() -> Vec<Agent> {
        vec![
            Agent {
                name: "A".to_string(),
                category: "NLP".to_string(),
                deployment: vec!["Cloud".to_string()],
                scores: ScoreCard {
                    residency_hosting: 5.0,
                    arabic_support: 5.0,
                    deployment_model: 5.0,
                    security_enterprise: 5.0,
                    sector_fit: 0.0,
                },
                ..Agent::default()
            },
            Agent {
                name: "B".to_string(),
                category: "Vision".to_string(),
                deployment: vec!["On-Prem".to_string()],
                sentinel_brief: Some("warehouse inspection imagery".to_string()),
                scores: ScoreCard {
                    residency_hosting: 4.0,
                    arabic_support: 4.0,
                    deployment_model: 4.0,
                    security_enterprise: 0.0,
                    sector_fit: 0.0,
                },
                ..Agent::default()
            },
        ]
    }

    #[test]
    fn category_filter_yields_exactly_the_matching_agent() {
        let agents = agents();
        let criteria = Criteria {
            category: "NLP".to_string(),
            ..Criteria::default()
        };
        let ranked = filter_and_rank(&agents, &criteria);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].agent.name, "A");
        assert_eq!(ranked[0].total, 20.0);
    }

    #[test]
    fn score_desc_with_no_filters_orders_a_before_b() {
        let agents = agents();
        let criteria = Criteria {
            sort: SortMode::ScoreDesc,
            ..Criteria::default()
        };
        let ranked = filter_and_rank(&agents, &criteria);
        let names: Vec<_> = ranked.iter().map(|r| r.agent.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn search_matching_only_the_brief_yields_that_agent() {
        let agents = agents();
        let criteria = Criteria {
            search: "warehouse".to_string(),
            ..Criteria::default()
        };
        let ranked = filter_and_rank(&agents, &criteria);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].agent.name, "B");
    }

    #[test]
    fn run_query_reports_count_and_markup_together() {
        let agents = agents();
        let output = run_query(&agents, &Criteria::default());
        assert_eq!(output.matched, 2);
        assert_eq!(output.count_label, "2 results");
        assert!(output.cards_html.contains("NLP"));
        assert!(output.cards_html.contains("Vision"));

        let output = run_query(
            &agents,
            &Criteria {
                category: "NLP".to_string(),
                ..Criteria::default()
            },
        );
        assert_eq!(output.matched, 1);
        assert_eq!(output.count_label, "1 result");

        let output = run_query(
            &agents,
            &Criteria {
                category: "Robotics".to_string(),
                ..Criteria::default()
            },
        );
        assert_eq!(output.matched, 0);
        assert_eq!(output.count_label, "0 results");
        assert!(output.cards_html.is_empty());
    }
}
