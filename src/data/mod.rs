use crate::logic::build_filter_options;
use crate::types::{Agent, Dataset, FilterOptions, QueryMetrics};

/// In-memory session state.
///
/// A dataset is installed once and read-only afterwards; filter options are
/// derived at install time, not per render.
pub struct DirectoryData {
    agents: Vec<Agent>,
    updated: Option<String>,
    options: FilterOptions,
    metrics: QueryMetrics,
}

impl DirectoryData {
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            updated: None,
            options: FilterOptions::default(),
            metrics: QueryMetrics::default(),
        }
    }

    /// Replaces the current dataset. This is the only place filter options
    /// are rebuilt.
    pub fn install(&mut self, dataset: Dataset) {
        self.options = build_filter_options(&dataset.agents);
        self.agents = dataset.agents;
        self.updated = dataset.updated;
        self.metrics = QueryMetrics::default();
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent_len(&self) -> usize {
        self.agents.len()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut QueryMetrics {
        &mut self.metrics
    }

    pub fn destroy(&mut self) {
        self.agents.clear();
        self.updated = None;
        self.options = FilterOptions::default();
        self.metrics = QueryMetrics::default();
    }
}

impl Default for DirectoryData {
    fn default() -> Self {
        Self::new()
    }
}
