use std::sync::Arc;
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::analysis::scoring::{ContributionScorer, ScoreInputs};
use crate::analysis::stats;
use crate::config::AggregatorConfig;
use crate::error::{Error, Result};
use crate::github::ProfileSource;
use crate::models::{ActivityEvent, AggregateResult, ProfileSummary, RepositoryRecord};

pub struct ProfileAggregator {
    source: Arc<dyn ProfileSource>,
    scorer: ContributionScorer,
    config: AggregatorConfig,
}

impl ProfileAggregator {
    pub fn new(source: impl ProfileSource + 'static, config: AggregatorConfig) -> Self {
        Self::with_source(Arc::new(source), config)
    }

    pub fn with_source(source: Arc<dyn ProfileSource>, config: AggregatorConfig) -> Self {
        Self {
            source,
            scorer: ContributionScorer::new(),
            config,
        }
    }

    /// Fetches and summarizes a profile, reading weekdays in local time.
    pub async fn aggregate(&self, username: &str) -> Result<AggregateResult> {
        self.aggregate_at(username, &Local, Utc::now()).await
    }

    pub async fn aggregate_at<Tz>(
        &self,
        username: &str,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<AggregateResult>
    where
        Tz: TimeZone + Sync,
    {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        // The login becomes a URL path segment.
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidIdentifier(username.to_string()));
        }

        tracing::info!(
            "Aggregating profile {} via {}",
            username,
            self.source.name()
        );

        let (profile, repos, events) = futures::try_join!(
            self.source.get_user(username),
            self.source
                .get_user_repos(username, self.config.repos_per_page),
            self.source.get_user_events(username),
        )?;

        tracing::info!(
            "Fetched {} repositories and {} events for {}",
            repos.len(),
            events.len(),
            username
        );

        Ok(self.summarize(profile, &repos, &events, tz, now))
    }

    pub fn summarize<Tz: TimeZone>(
        &self,
        profile: ProfileSummary,
        repos: &[RepositoryRecord],
        events: &[ActivityEvent],
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> AggregateResult {
        let total_stars = stats::total_stars(repos);
        let total_forks = stats::total_forks(repos);
        let languages = stats::language_frequency(repos);
        tracing::debug!("Languages breakdown: {:?}", languages.sorted());

        let most_active_day = stats::most_active_day(events, tz, now);
        let commit_count =
            stats::recent_commit_count(events, now, self.config.commit_window_days);

        let inputs = ScoreInputs {
            public_repos: profile.public_repos,
            total_stars,
            total_forks,
            followers: profile.followers,
            distinct_languages: languages.len() as u64,
            recent_commits: commit_count,
        };
        tracing::debug!("Score inputs: {:?}", inputs);
        let contribution_score = self.scorer.score(&inputs);

        AggregateResult {
            profile,
            total_stars,
            total_forks,
            languages,
            most_active_day: stats::weekday_name(most_active_day).to_string(),
            commit_count,
            contribution_score,
            generated_at: now,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use crate::models::{EventKind, EventPayload, PushCommit};

    /// In-memory source that counts calls and can be told to fail.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub profile: Option<ProfileSummary>,
        pub repos: Vec<RepositoryRecord>,
        pub events: Vec<ActivityEvent>,
        pub fail_events: AtomicBool,
        pub calls: AtomicUsize,
    }

    impl FakeSource {
        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        async fn get_user(&self, username: &str) -> Result<ProfileSummary> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.profile
                .clone()
                .ok_or_else(|| Error::UserNotFound(username.to_string()))
        }

        async fn get_user_repos(&self, _username: &str, per_page: u32) -> Result<Vec<RepositoryRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.repos.iter().take(per_page as usize).cloned().collect())
        }

        async fn get_user_events(&self, _username: &str) -> Result<Vec<ActivityEvent>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_events.load(Ordering::SeqCst) {
                return Err(Error::GitHubApi("events unavailable".to_string()));
            }
            Ok(self.events.clone())
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    pub(crate) fn profile(login: &str, public_repos: u64, followers: u64) -> ProfileSummary {
        ProfileSummary {
            login: login.to_string(),
            name: None,
            public_repos,
            followers,
            following: 3,
        }
    }

    pub(crate) fn repo(language: Option<&str>, stars: u64, forks: u64) -> RepositoryRecord {
        RepositoryRecord {
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
        }
    }

    pub(crate) fn push(at: &str, commits: usize) -> ActivityEvent {
        ActivityEvent {
            kind: EventKind::Push,
            created_at: at.parse().unwrap(),
            payload: EventPayload {
                commits: Some((0..commits).map(|i| PushCommit { sha: i.to_string() }).collect()),
            },
        }
    }

    pub(crate) fn now() -> DateTime<Utc> {
        "2024-03-05T12:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_aggregate_worked_example() {
        let source = FakeSource {
            profile: Some(profile("octocat", 10, 150)),
            repos: vec![
                repo(Some("Rust"), 1000, 10),
                repo(Some("Go"), 400, 5),
                repo(Some("Python"), 100, 5),
                repo(None, 0, 0),
            ],
            events: vec![
                push("2024-03-04T10:00:00Z", 3),
                push("2024-03-04T11:00:00Z", 2),
                push("2023-12-01T11:00:00Z", 8),
            ],
            ..Default::default()
        };
        let aggregator = ProfileAggregator::new(source, AggregatorConfig::default());

        let result = aggregator.aggregate_at("octocat", &Utc, now()).await.unwrap();
        assert_eq!(result.total_stars, 1500);
        assert_eq!(result.total_forks, 20);
        assert_eq!(result.languages.len(), 3);
        assert_eq!(result.commit_count, 5);
        assert_eq!(result.most_active_day, "Monday");
        assert_eq!(result.contribution_score, 5535);
        assert_eq!(result.generated_at, now());
    }

    #[tokio::test]
    async fn test_aggregate_empty_profile() {
        let source = FakeSource {
            profile: Some(profile("newbie", 0, 0)),
            ..Default::default()
        };
        let aggregator = ProfileAggregator::new(source, AggregatorConfig::default());

        let result = aggregator.aggregate_at("newbie", &Utc, now()).await.unwrap();
        assert_eq!(result.total_stars, 0);
        assert_eq!(result.total_forks, 0);
        assert!(result.languages.is_empty());
        assert_eq!(result.language_list(), "None");
        assert_eq!(result.most_active_day, "Tuesday");
        assert_eq!(result.contribution_score, 0);
    }

    #[tokio::test]
    async fn test_empty_identifier_does_not_fetch() {
        let source = Arc::new(FakeSource::default());
        let aggregator = ProfileAggregator::with_source(source.clone(), AggregatorConfig::default());

        let err = aggregator.aggregate_at("   ", &Utc, now()).await.unwrap_err();
        assert!(matches!(err, Error::EmptyIdentifier));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_path_like_identifier_is_rejected_without_fetch() {
        let source = Arc::new(FakeSource {
            profile: Some(profile("octocat", 1, 1)),
            ..Default::default()
        });
        let aggregator = ProfileAggregator::with_source(source.clone(), AggregatorConfig::default());

        for bad in ["octocat/repos", "octocat?per_page=1", "octocat#x", "../orgs", "octo cat"] {
            let err = aggregator.aggregate_at(bad, &Utc, now()).await.unwrap_err();
            assert!(matches!(err, Error::InvalidIdentifier(_)), "{bad}");
        }
        assert_eq!(source.calls(), 0);

        assert!(aggregator.aggregate_at(" octo-cat_1 ", &Utc, now()).await.is_ok());
    }

    #[tokio::test]
    async fn test_result_carries_canonical_login() {
        let source = FakeSource {
            profile: Some(profile("octocat", 1, 1)),
            ..Default::default()
        };
        let aggregator = ProfileAggregator::new(source, AggregatorConfig::default());

        let result = aggregator.aggregate_at("OctoCat", &Utc, now()).await.unwrap();
        assert_eq!(result.profile.login, "octocat");
        assert_eq!(result.profile.display_name(), "octocat");
    }

    #[tokio::test]
    async fn test_any_fetch_failure_fails_aggregation() {
        let source = FakeSource {
            profile: Some(profile("octocat", 1, 1)),
            fail_events: AtomicBool::new(true),
            ..Default::default()
        };
        let aggregator = ProfileAggregator::new(source, AggregatorConfig::default());
        assert!(aggregator.aggregate_at("octocat", &Utc, now()).await.is_err());
    }

    #[tokio::test]
    async fn test_repos_limited_to_page_size() {
        let source = FakeSource {
            profile: Some(profile("prolific", 150, 0)),
            repos: (0..150).map(|_| repo(None, 1, 0)).collect(),
            ..Default::default()
        };
        let aggregator = ProfileAggregator::new(source, AggregatorConfig::default());

        let result = aggregator.aggregate_at("prolific", &Utc, now()).await.unwrap();
        assert_eq!(result.total_stars, 100);
    }
}
