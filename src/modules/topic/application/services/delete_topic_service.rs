use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicListCache, TopicStore, TopicStoreError},
};

/// Hard-deletes a topic and clears the list cache before acknowledging
/// success. Deleting an already-removed id reports not-found.
#[derive(Debug, Clone)]
pub struct DeleteTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    store: S,
    cache: L,
}

impl<S, L> DeleteTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    pub fn new(store: S, cache: L) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl<S, L> DeleteTopicUseCase for DeleteTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    async fn execute(&self, id: i64) -> Result<(), DeleteTopicError> {
        self.store.delete(id).await.map_err(|e| match e {
            TopicStoreError::TopicNotFound => DeleteTopicError::TopicNotFound,
            other => DeleteTopicError::RepositoryError(other.to_string()),
        })?;

        self.cache
            .invalidate_all()
            .await
            .map_err(|e| DeleteTopicError::CacheError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::topic::application::ports::outgoing::{
        ListCacheError, NewTopic, PageRequest, TopicChanges, TopicDetailView, TopicListKey,
        TopicPage, TopicSort, TopicView,
    };

    /// Deletes succeed once, then report not-found, mirroring a real store.
    #[derive(Clone)]
    struct OneShotDeleteStore {
        existing: Arc<Mutex<Vec<i64>>>,
    }

    impl OneShotDeleteStore {
        fn with_topic(id: i64) -> Self {
            Self {
                existing: Arc::new(Mutex::new(vec![id])),
            }
        }
    }

    #[async_trait]
    impl TopicStore for OneShotDeleteStore {
        async fn list(
            &self,
            _course_name: Option<&str>,
            _sort: &TopicSort,
            _page: &PageRequest,
        ) -> Result<TopicPage, TopicStoreError> {
            unimplemented!()
        }

        async fn find_detail(&self, _id: i64) -> Result<Option<TopicDetailView>, TopicStoreError> {
            unimplemented!()
        }

        async fn insert(&self, _data: NewTopic) -> Result<TopicView, TopicStoreError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: i64,
            _changes: TopicChanges,
        ) -> Result<TopicView, TopicStoreError> {
            unimplemented!()
        }

        async fn delete(&self, id: i64) -> Result<(), TopicStoreError> {
            let mut existing = self.existing.lock().unwrap();
            match existing.iter().position(|&e| e == id) {
                Some(pos) => {
                    existing.remove(pos);
                    Ok(())
                }
                None => Err(TopicStoreError::TopicNotFound),
            }
        }
    }

    #[derive(Clone)]
    struct SpyCache {
        invalidated: Arc<AtomicBool>,
    }

    impl SpyCache {
        fn new() -> Self {
            Self {
                invalidated: Arc::new(AtomicBool::new(false)),
            }
        }

        fn was_invalidated(&self) -> bool {
            self.invalidated.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TopicListCache for SpyCache {
        async fn get(&self, _key: &TopicListKey) -> Result<Option<TopicPage>, ListCacheError> {
            Ok(None)
        }

        async fn put(&self, _key: &TopicListKey, _page: &TopicPage) -> Result<(), ListCacheError> {
            Ok(())
        }

        async fn invalidate_all(&self) -> Result<(), ListCacheError> {
            self.invalidated.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn deletes_topic_and_invalidates_cache() {
        let cache = SpyCache::new();
        let service = DeleteTopicService::new(OneShotDeleteStore::with_topic(9), cache.clone());

        let result = service.execute(9).await;

        assert!(result.is_ok());
        assert!(cache.was_invalidated());
    }

    #[tokio::test]
    async fn second_delete_of_same_id_is_not_found() {
        let service = DeleteTopicService::new(OneShotDeleteStore::with_topic(9), SpyCache::new());

        service.execute(9).await.unwrap();
        let second = service.execute(9).await;

        assert!(matches!(second, Err(DeleteTopicError::TopicNotFound)));
    }

    #[tokio::test]
    async fn missing_topic_leaves_cache_untouched() {
        let cache = SpyCache::new();
        let service = DeleteTopicService::new(OneShotDeleteStore::with_topic(9), cache.clone());

        let result = service.execute(999).await;

        assert!(matches!(result, Err(DeleteTopicError::TopicNotFound)));
        assert!(!cache.was_invalidated());
    }
}
