use serde::{Deserialize, Serialize};

/// Lifecycle state of a forum topic.
///
/// Every topic starts as `Open`; the other states exist for the wider forum
/// domain and are never transitioned by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    Open,
    Closed,
    Solved,
}

impl Default for TopicStatus {
    fn default() -> Self {
        TopicStatus::Open
    }
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Open => "OPEN",
            TopicStatus::Closed => "CLOSED",
            TopicStatus::Solved => "SOLVED",
        }
    }
}
