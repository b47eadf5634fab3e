use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{
    PageRequest, SortDirection, SortField, TopicPage, TopicSort,
};

//
// ──────────────────────────────────────────────────────────
// List Topics Query
// ──────────────────────────────────────────────────────────
//

const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone)]
pub struct ListTopicsQuery {
    course_name: Option<String>,
    page: PageRequest,
    sort: TopicSort,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsQueryError {
    #[error("Page size must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize,

    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("Unknown sort direction: {0}")]
    InvalidSortDirection(String),
}

impl ListTopicsQuery {
    /// Builds a validated query. `sort` is `field[,direction]`, e.g.
    /// `creationDate,desc`; defaults are page 0, size 20, `id,asc`.
    pub fn new(
        course_name: Option<String>,
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
    ) -> Result<Self, ListTopicsQueryError> {
        let course_name = course_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let defaults = PageRequest::default();
        let size = size.unwrap_or(defaults.size);
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ListTopicsQueryError::InvalidPageSize);
        }

        let page = PageRequest {
            page: page.unwrap_or(defaults.page),
            size,
        };

        let sort = match sort {
            Some(raw) => parse_sort(raw)?,
            None => TopicSort::default(),
        };

        Ok(Self {
            course_name,
            page,
            sort,
        })
    }

    pub fn course_name(&self) -> Option<&str> {
        self.course_name.as_deref()
    }

    pub fn page(&self) -> &PageRequest {
        &self.page
    }

    pub fn sort(&self) -> &TopicSort {
        &self.sort
    }
}

fn parse_sort(raw: &str) -> Result<TopicSort, ListTopicsQueryError> {
    let mut parts = raw.splitn(2, ',');

    let field = match parts.next().map(str::trim).unwrap_or("") {
        "id" => SortField::Id,
        "title" => SortField::Title,
        "creationDate" => SortField::CreationDate,
        "status" => SortField::Status,
        other => return Err(ListTopicsQueryError::InvalidSortField(other.to_string())),
    };

    let direction = match parts.next().map(str::trim) {
        None | Some("asc") => SortDirection::Asc,
        Some("desc") => SortDirection::Desc,
        Some(other) => {
            return Err(ListTopicsQueryError::InvalidSortDirection(
                other.to_string(),
            ))
        }
    };

    Ok(TopicSort { field, direction })
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error & Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to list topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, query: ListTopicsQuery) -> Result<TopicPage, ListTopicsError>;
}
