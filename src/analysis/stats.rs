use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};

use crate::models::{ActivityEvent, LanguageFrequency, RepositoryRecord};

pub fn total_stars(repos: &[RepositoryRecord]) -> u64 {
    repos.iter().map(|r| r.stargazers_count).sum()
}

pub fn total_forks(repos: &[RepositoryRecord]) -> u64 {
    repos.iter().map(|r| r.forks_count).sum()
}

/// Repositories without a primary language are left out entirely.
pub fn language_frequency(repos: &[RepositoryRecord]) -> LanguageFrequency {
    let mut frequency = LanguageFrequency::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !language.is_empty() {
            frequency.record(language);
        }
    }
    frequency
}

/// Weekday with the most events in `tz`. Ties go to the weekday seen first;
/// with no events, the weekday of `now`.
pub fn most_active_day<Tz: TimeZone>(
    events: &[ActivityEvent],
    tz: &Tz,
    now: DateTime<Utc>,
) -> Weekday {
    let mut counts: Vec<(Weekday, u32)> = Vec::with_capacity(7);

    for event in events {
        let day = event.created_at.with_timezone(tz).weekday();
        match counts.iter_mut().find(|(d, _)| *d == day) {
            Some((_, count)) => *count += 1,
            None => counts.push((day, 1)),
        }
    }

    let mut best: Option<(Weekday, u32)> = None;
    for (day, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((day, count));
        }
    }

    best.map(|(day, _)| day)
        .unwrap_or_else(|| now.with_timezone(tz).weekday())
}

/// Commits from push events strictly newer than `now - window_days`.
/// A window reaching past the representable range counts every push.
pub fn recent_commit_count(events: &[ActivityEvent], now: DateTime<Utc>, window_days: i64) -> u64 {
    let cutoff = Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    events
        .iter()
        .filter(|e| e.is_push() && e.created_at > cutoff)
        .map(|e| e.commit_count())
        .sum()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, EventPayload, PushCommit};
    use chrono::FixedOffset;

    fn repo(language: Option<&str>, stars: u64, forks: u64) -> RepositoryRecord {
        RepositoryRecord {
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
        }
    }

    fn event(kind: EventKind, at: &str, commits: Option<usize>) -> ActivityEvent {
        ActivityEvent {
            kind,
            created_at: at.parse().unwrap(),
            payload: EventPayload {
                commits: commits.map(|n| {
                    (0..n)
                        .map(|i| PushCommit { sha: i.to_string() })
                        .collect()
                }),
            },
        }
    }

    fn now() -> DateTime<Utc> {
        // A Tuesday
        "2024-03-05T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_totals() {
        let repos = vec![repo(Some("Rust"), 10, 2), repo(None, 5, 1), repo(Some("Go"), 0, 0)];
        assert_eq!(total_stars(&repos), 15);
        assert_eq!(total_forks(&repos), 3);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(total_stars(&[]), 0);
        assert_eq!(total_forks(&[]), 0);
        assert!(language_frequency(&[]).is_empty());
    }

    #[test]
    fn test_language_frequency_skips_missing_language() {
        let repos = vec![
            repo(Some("Rust"), 0, 0),
            repo(None, 0, 0),
            repo(Some("Rust"), 0, 0),
            repo(Some("TypeScript"), 0, 0),
            repo(Some(""), 0, 0),
        ];
        let freq = language_frequency(&repos);
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.get("Rust"), Some(2));
        assert_eq!(freq.get("TypeScript"), Some(1));
    }

    #[test]
    fn test_most_active_day_picks_highest_count() {
        let events = vec![
            event(EventKind::Push, "2024-03-04T10:00:00Z", None), // Monday
            event(EventKind::Push, "2024-03-01T10:00:00Z", None), // Friday
            event(EventKind::Push, "2024-02-23T10:00:00Z", None), // Friday
        ];
        assert_eq!(most_active_day(&events, &Utc, now()), Weekday::Fri);
    }

    #[test]
    fn test_most_active_day_tie_goes_to_first_seen() {
        let events = vec![
            event(EventKind::Push, "2024-03-03T10:00:00Z", None), // Sunday
            event(EventKind::Push, "2024-03-02T10:00:00Z", None), // Saturday
            event(EventKind::Push, "2024-02-25T10:00:00Z", None), // Sunday
            event(EventKind::Push, "2024-02-24T10:00:00Z", None), // Saturday
        ];
        assert_eq!(most_active_day(&events, &Utc, now()), Weekday::Sun);
    }

    #[test]
    fn test_most_active_day_without_events_uses_today() {
        assert_eq!(most_active_day(&[], &Utc, now()), Weekday::Tue);
    }

    #[test]
    fn test_most_active_day_respects_time_zone() {
        // Monday 23:30 UTC is already Tuesday at UTC+2
        let events = vec![event(EventKind::Push, "2024-03-04T23:30:00Z", None)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(most_active_day(&events, &Utc, now()), Weekday::Mon);
        assert_eq!(most_active_day(&events, &plus_two, now()), Weekday::Tue);
    }

    #[test]
    fn test_recent_commit_count_window() {
        let events = vec![
            event(EventKind::Push, "2024-03-01T00:00:00Z", Some(3)),
            event(EventKind::Push, "2024-03-05T11:00:00Z", None),
            event(EventKind::Other("PullRequestEvent".into()), "2024-03-02T00:00:00Z", Some(4)),
            // exactly 30 days before now: excluded
            event(EventKind::Push, "2024-02-04T12:00:00Z", Some(7)),
            event(EventKind::Push, "2024-02-04T12:00:01Z", Some(2)),
            event(EventKind::Push, "2024-01-01T00:00:00Z", Some(9)),
        ];
        assert_eq!(recent_commit_count(&events, now(), 30), 5);
    }

    #[test]
    fn test_recent_commit_count_huge_window_does_not_overflow() {
        let events = vec![
            event(EventKind::Push, "2024-03-01T00:00:00Z", Some(3)),
            event(EventKind::Push, "1999-01-01T00:00:00Z", Some(4)),
        ];
        assert_eq!(recent_commit_count(&events, now(), 100_000_000), 7);
        assert_eq!(recent_commit_count(&events, now(), i64::MAX), 7);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
