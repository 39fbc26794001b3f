use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::ProfileSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Repository count per primary language, keyed in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageFrequency {
    entries: Vec<LanguageCount>,
}

impl LanguageFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, language: &str) {
        match self.entries.iter_mut().find(|e| e.language == language) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(LanguageCount {
                language: language.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, language: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.language == language)
            .map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count. Equal counts keep first-encountered order.
    pub fn sorted(&self) -> Vec<&LanguageCount> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    pub fn sorted_names(&self) -> Vec<&str> {
        self.sorted().into_iter().map(|e| e.language.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub profile: ProfileSummary,
    pub total_stars: u64,
    pub total_forks: u64,
    pub languages: LanguageFrequency,
    pub most_active_day: String,
    pub commit_count: u64,
    pub contribution_score: u64,
    pub generated_at: DateTime<Utc>,
}

impl AggregateResult {
    /// Comma-joined languages by descending frequency, or `None` when there are none.
    pub fn language_list(&self) -> String {
        if self.languages.is_empty() {
            "None".to_string()
        } else {
            self.languages.sorted_names().join(", ")
        }
    }
}
