use async_trait::async_trait;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicDetailError, GetTopicDetailUseCase, ListTopicsError,
    ListTopicsQuery, ListTopicsUseCase, UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{TopicDetailView, TopicPage, TopicView};

//
// ──────────────────────────────────────────────────────────
// List Topics
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubListTopicsUseCase {
    result: Result<TopicPage, ListTopicsError>,
}

impl StubListTopicsUseCase {
    pub fn success(page: TopicPage) -> Self {
        Self { result: Ok(page) }
    }

    pub fn empty() -> Self {
        Self::success(TopicPage::empty(0, 20))
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, _query: ListTopicsQuery) -> Result<TopicPage, ListTopicsError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Create Topic
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubCreateTopicUseCase {
    result: Result<TopicView, CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn success(topic: TopicView) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn course_not_found() -> Self {
        Self {
            result: Err(CreateTopicError::CourseNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Get Topic Detail
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetTopicDetailUseCase {
    result: Result<TopicDetailView, GetTopicDetailError>,
}

impl StubGetTopicDetailUseCase {
    pub fn success(detail: TopicDetailView) -> Self {
        Self { result: Ok(detail) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicDetailError::TopicNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicDetailError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicDetailUseCase for StubGetTopicDetailUseCase {
    async fn execute(&self, _id: i64) -> Result<TopicDetailView, GetTopicDetailError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Update Topic
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<TopicView, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn success(topic: TopicView) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateTopicError::TopicNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(UpdateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete Topic
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteTopicError::TopicNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(DeleteTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _id: i64) -> Result<(), DeleteTopicError> {
        self.result.clone()
    }
}
