use crate::types::{RankedAgent, SortMode};

/// Orders the filtered set in place. Score sorts break ties by ascending
/// name; name sorts have no secondary key. `Unsorted` keeps the filter
/// output order, which is the dataset's insertion order.
pub fn sort_ranked(rows: &mut [RankedAgent<'_>], mode: SortMode) {
    match mode {
        SortMode::ScoreDesc => rows.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.agent.name.cmp(&b.agent.name))
        }),
        SortMode::ScoreAsc => rows.sort_by(|a, b| {
            a.total
                .total_cmp(&b.total)
                .then_with(|| a.agent.name.cmp(&b.agent.name))
        }),
        SortMode::NameAsc => rows.sort_by(|a, b| a.agent.name.cmp(&b.agent.name)),
        SortMode::NameDesc => rows.sort_by(|a, b| b.agent.name.cmp(&a.agent.name)),
        SortMode::Unsorted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rank;
    use crate::types::{Agent, ScoreCard};

    fn agent(name: &str, residency_hosting: f64) -> Agent {
        Agent {
            name: name.to_string(),
            scores: ScoreCard {
                residency_hosting,
                ..ScoreCard::default()
            },
            ..Agent::default()
        }
    }

    fn names<'a>(rows: &'a [RankedAgent<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.agent.name.as_str()).collect()
    }

    #[test]
    fn score_desc_orders_high_to_low() {
        let agents = vec![agent("Low", 3.0), agent("High", 9.0), agent("Mid", 6.0)];
        let mut rows: Vec<_> = agents.iter().map(rank).collect();
        sort_ranked(&mut rows, SortMode::ScoreDesc);
        assert_eq!(names(&rows), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn score_ties_break_by_ascending_name_in_both_directions() {
        let agents = vec![agent("Zeta", 5.0), agent("Alpha", 5.0), agent("Mid", 3.0)];

        let mut rows: Vec<_> = agents.iter().map(rank).collect();
        sort_ranked(&mut rows, SortMode::ScoreDesc);
        assert_eq!(names(&rows), vec!["Alpha", "Zeta", "Mid"]);

        let mut rows: Vec<_> = agents.iter().map(rank).collect();
        sort_ranked(&mut rows, SortMode::ScoreAsc);
        assert_eq!(names(&rows), vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn name_sorts_have_no_secondary_key() {
        let agents = vec![agent("Beta", 1.0), agent("Alpha", 2.0), agent("Gamma", 0.0)];

        let mut rows: Vec<_> = agents.iter().map(rank).collect();
        sort_ranked(&mut rows, SortMode::NameAsc);
        assert_eq!(names(&rows), vec!["Alpha", "Beta", "Gamma"]);

        sort_ranked(&mut rows, SortMode::NameDesc);
        assert_eq!(names(&rows), vec!["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn unsorted_preserves_input_order() {
        let agents = vec![agent("B", 1.0), agent("A", 9.0), agent("C", 5.0)];
        let mut rows: Vec<_> = agents.iter().map(rank).collect();
        sort_ranked(&mut rows, SortMode::Unsorted);
        assert_eq!(names(&rows), vec!["B", "A", "C"]);
    }
}
