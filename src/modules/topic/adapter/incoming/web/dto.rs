use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::outgoing::{TopicDetailView, TopicPage, TopicView};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummaryResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_date: DateTime<Utc>,
    pub status: TopicStatus,
    pub course_name: String,
}

impl From<TopicView> for TopicSummaryResponse {
    fn from(view: TopicView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            message: view.message,
            creation_date: view.creation_date,
            status: view.status,
            course_name: view.course_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetailResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_date: DateTime<Utc>,
    pub status: TopicStatus,
    pub course_id: i64,
    pub course_name: String,
}

impl From<TopicDetailView> for TopicDetailResponse {
    fn from(view: TopicDetailView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            message: view.message,
            creation_date: view.creation_date,
            status: view.status,
            course_id: view.course_id,
            course_name: view.course_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPageResponse {
    pub items: Vec<TopicSummaryResponse>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<TopicPage> for TopicPageResponse {
    fn from(page: TopicPage) -> Self {
        Self {
            items: page
                .items
                .into_iter()
                .map(TopicSummaryResponse::from)
                .collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
