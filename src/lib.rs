pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod receipt;

pub use config::{AggregatorConfig, Config};
pub use error::{Error, Result};
pub use github::{GitHubClient, ProfileSource};
pub use analysis::ProfileAggregator;
pub use receipt::{Receipt, ReceiptPresenter, TriggerOutcome};
