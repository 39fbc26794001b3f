use async_trait::async_trait;
use crate::error::Result;
use crate::models::{ActivityEvent, ProfileSummary, RepositoryRecord};

/// Read-only source of profile data for a single login.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<ProfileSummary>;
    async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<RepositoryRecord>>;
    async fn get_user_events(&self, username: &str) -> Result<Vec<ActivityEvent>>;
    fn name(&self) -> &str;
}
