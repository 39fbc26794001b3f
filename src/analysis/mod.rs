pub mod aggregator;
pub mod scoring;
pub mod stats;

pub use aggregator::ProfileAggregator;
pub use scoring::{ContributionScorer, ScoreInputs, ScoreWeights};
