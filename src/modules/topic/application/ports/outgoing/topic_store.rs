use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topic::application::domain::entities::TopicStatus;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Summary projection of a topic, as returned by list/create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicView {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_date: DateTime<Utc>,
    pub status: TopicStatus,
    pub course_name: String,
}

/// Detail projection of a topic, as returned by getDetail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicDetailView {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_date: DateTime<Utc>,
    pub status: TopicStatus,
    pub course_id: i64,
    pub course_name: String,
}

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: String,
    pub message: String,
    pub course_id: i64,
}

/// Only title and message are mutable after creation.
#[derive(Debug, Clone)]
pub struct TopicChanges {
    pub title: String,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Pagination & ordering
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Id,
    Title,
    CreationDate,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::CreationDate => "creationDate",
            SortField::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TopicSort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// One page of topic summaries plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicPage {
    pub items: Vec<TopicView>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl TopicPage {
    pub fn empty(page: u64, size: u64) -> Self {
        Self {
            items: Vec::new(),
            page,
            size,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Paginated scan, optionally restricted to an exact course name.
    async fn list(
        &self,
        course_name: Option<&str>,
        sort: &TopicSort,
        page: &PageRequest,
    ) -> Result<TopicPage, TopicStoreError>;

    async fn find_detail(&self, id: i64) -> Result<Option<TopicDetailView>, TopicStoreError>;

    /// Persists a new topic; the store assigns id and creation date and the
    /// status starts as OPEN.
    async fn insert(&self, data: NewTopic) -> Result<TopicView, TopicStoreError>;

    /// Fails with `TopicNotFound` when the id does not exist. The existence
    /// check happens before the write.
    async fn update(&self, id: i64, changes: TopicChanges) -> Result<TopicView, TopicStoreError>;

    /// Hard delete. Fails with `TopicNotFound` when the id does not exist.
    async fn delete(&self, id: i64) -> Result<(), TopicStoreError>;
}
