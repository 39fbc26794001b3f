#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub repo_weight: u64,
    pub star_weight: u64,
    pub fork_weight: u64,
    pub follower_weight: u64,
    pub language_weight: u64,
    pub commit_weight: u64,
    pub star_bonus: Bonus,
    pub follower_bonus: Bonus,
    pub repo_bonus: Bonus,
}

/// Flat points awarded when a value strictly exceeds `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct Bonus {
    pub threshold: u64,
    pub points: u64,
}

impl Bonus {
    fn apply(&self, value: u64) -> u64 {
        if value > self.threshold {
            self.points
        } else {
            0
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            repo_weight: 2,
            star_weight: 3,
            fork_weight: 2,
            follower_weight: 1,
            language_weight: 5,
            commit_weight: 2,
            star_bonus: Bonus { threshold: 1000, points: 500 },
            follower_bonus: Bonus { threshold: 100, points: 300 },
            repo_bonus: Bonus { threshold: 50, points: 200 },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInputs {
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub followers: u64,
    pub distinct_languages: u64,
    pub recent_commits: u64,
}

pub struct ContributionScorer {
    weights: ScoreWeights,
}

impl ContributionScorer {
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, inputs: &ScoreInputs) -> u64 {
        let w = &self.weights;

        let base = inputs.public_repos.saturating_mul(w.repo_weight)
            .saturating_add(inputs.total_stars.saturating_mul(w.star_weight))
            .saturating_add(inputs.total_forks.saturating_mul(w.fork_weight))
            .saturating_add(inputs.followers.saturating_mul(w.follower_weight))
            .saturating_add(inputs.distinct_languages.saturating_mul(w.language_weight))
            .saturating_add(inputs.recent_commits.saturating_mul(w.commit_weight));

        let bonus = w.star_bonus.apply(inputs.total_stars)
            + w.follower_bonus.apply(inputs.followers)
            + w.repo_bonus.apply(inputs.public_repos);

        base.saturating_add(bonus)
    }
}

impl Default for ContributionScorer {
    fn default() -> Self {
        Self::new()
    }
}
