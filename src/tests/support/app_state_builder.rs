use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicDetailUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::AppState;

/// Builds an `AppState` with benign stubs; tests override only the use case
/// under exercise.
pub struct TestAppStateBuilder {
    list_topics: Arc<dyn ListTopicsUseCase + Send + Sync>,
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    get_topic_detail: Arc<dyn GetTopicDetailUseCase + Send + Sync>,
    update_topic: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_topics: Arc::new(StubListTopicsUseCase::empty()),
            create_topic: Arc::new(StubCreateTopicUseCase::repo_error("not used in this test")),
            get_topic_detail: Arc::new(StubGetTopicDetailUseCase::not_found()),
            update_topic: Arc::new(StubUpdateTopicUseCase::not_found()),
            delete_topic: Arc::new(StubDeleteTopicUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_topics(mut self, stub: impl ListTopicsUseCase + 'static) -> Self {
        self.list_topics = Arc::new(stub);
        self
    }

    pub fn with_create_topic(mut self, stub: impl CreateTopicUseCase + 'static) -> Self {
        self.create_topic = Arc::new(stub);
        self
    }

    pub fn with_get_topic_detail(mut self, stub: impl GetTopicDetailUseCase + 'static) -> Self {
        self.get_topic_detail = Arc::new(stub);
        self
    }

    pub fn with_update_topic(mut self, stub: impl UpdateTopicUseCase + 'static) -> Self {
        self.update_topic = Arc::new(stub);
        self
    }

    pub fn with_delete_topic(mut self, stub: impl DeleteTopicUseCase + 'static) -> Self {
        self.delete_topic = Arc::new(stub);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_topics_use_case: self.list_topics,
            create_topic_use_case: self.create_topic,
            get_topic_detail_use_case: self.get_topic_detail,
            update_topic_use_case: self.update_topic,
            delete_topic_use_case: self.delete_topic,
        })
    }
}
