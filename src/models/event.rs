use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Push,
    Other(String),
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PushEvent" => EventKind::Push,
            _ => EventKind::Other(s),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Push => "PushEvent".to_string(),
            EventKind::Other(s) => s,
        }
    }
}

/// One entry of `GET /users/{login}/events/public`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<PushCommit>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub sha: String,
}

impl ActivityEvent {
    pub fn is_push(&self) -> bool {
        self.kind == EventKind::Push
    }

    /// Commits carried by the event; zero when the payload has no commit list.
    pub fn commit_count(&self) -> u64 {
        self.payload
            .commits
            .as_ref()
            .map(|c| c.len() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        let json = r#"[
            {
                "id": "1",
                "type": "PushEvent",
                "created_at": "2024-03-05T10:00:00Z",
                "payload": {"commits": [{"sha": "a"}, {"sha": "b"}]}
            },
            {
                "id": "2",
                "type": "WatchEvent",
                "created_at": "2024-03-04T10:00:00Z",
                "payload": {"action": "started"}
            },
            {
                "id": "3",
                "type": "PushEvent",
                "created_at": "2024-03-03T10:00:00Z",
                "payload": {}
            }
        ]"#;
        let events: Vec<ActivityEvent> = serde_json::from_str(json).unwrap();

        assert!(events[0].is_push());
        assert_eq!(events[0].commit_count(), 2);
        assert_eq!(events[1].kind, EventKind::Other("WatchEvent".to_string()));
        assert_eq!(events[1].commit_count(), 0);
        assert!(events[2].is_push());
        assert_eq!(events[2].commit_count(), 0);
    }
}
