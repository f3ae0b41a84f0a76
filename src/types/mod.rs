pub mod agent;
pub mod criteria;
pub mod metrics;
pub mod options;

pub use agent::{Agent, Dataset, GccCompliance, RankedAgent, ScoreCard, Tier};
pub use criteria::{ComplianceFilter, Criteria, SortMode};
pub use metrics::QueryMetrics;
pub use options::FilterOptions;
