use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

const MAX_TITLE_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    title: String,
    message: String,
    course_id: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl CreateTopicCommand {
    pub fn new(
        title: String,
        message: String,
        course_id: i64,
    ) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(CreateTopicCommandError::EmptyMessage);
        }

        Ok(Self {
            title: title.to_string(),
            message: message.to_string(),
            course_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error & Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Cache invalidation failed: {0}")]
    CacheError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError>;
}
