use crate::types::{Agent, FilterOptions};

/// Derives the selector option sets from the full dataset: distinct non-empty
/// values, list fields flattened across all entries, sorted lexicographically.
pub fn build_filter_options(agents: &[Agent]) -> FilterOptions {
    FilterOptions {
        categories: unique_sorted(agents.iter().map(|a| a.category.as_str())),
        deployments: unique_sorted(
            agents
                .iter()
                .flat_map(|a| a.deployment.iter().map(String::as_str)),
        ),
        sectors: unique_sorted(
            agents
                .iter()
                .flat_map(|a| a.sectors.iter().map(String::as_str)),
        ),
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();
    out.sort();
    out.dedup();
    out
}
