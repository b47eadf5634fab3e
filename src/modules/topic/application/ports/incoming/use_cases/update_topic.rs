use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

const MAX_TITLE_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

/// Update touches only title and message. Course, status and creation date
/// are immutable through this operation.
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    id: i64,
    title: String,
    message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl UpdateTopicCommand {
    pub fn new(id: i64, title: String, message: String) -> Result<Self, UpdateTopicCommandError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(UpdateTopicCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(UpdateTopicCommandError::TitleTooLong);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(UpdateTopicCommandError::EmptyMessage);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error & Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Cache invalidation failed: {0}")]
    CacheError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError>;
}
