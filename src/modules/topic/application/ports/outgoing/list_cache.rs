use async_trait::async_trait;

use crate::topic::application::ports::outgoing::topic_store::{PageRequest, TopicPage, TopicSort};

/// Cache key for one list result: the full (filter, pagination, sort)
/// combination. Two requests with the same key must observe the same page
/// until the cache is invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicListKey {
    pub course_name: Option<String>,
    pub page: u64,
    pub size: u64,
    pub sort: TopicSort,
}

impl TopicListKey {
    pub fn new(course_name: Option<String>, page: &PageRequest, sort: &TopicSort) -> Self {
        Self {
            course_name,
            page: page.page,
            size: page.size,
            sort: *sort,
        }
    }

    /// Stable textual form used by cache backends to derive storage keys.
    ///
    /// The filter segment is tagged (`all` vs `n:<name>`) and the name has
    /// `|` escaped, so no course name can alias the unfiltered key or bleed
    /// into the other segments.
    pub fn token(&self) -> String {
        let filter = match self.course_name.as_deref() {
            Some(name) => format!("n:{}", name.replace('\\', r"\\").replace('|', r"\|")),
            None => "all".to_string(),
        };

        format!(
            "{}|{}|{}|{}|{}",
            filter,
            self.page,
            self.size,
            self.sort.field.as_str(),
            self.sort.direction.as_str(),
        )
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Key→page cache for list results. Mutations clear it entirely; there is no
/// per-key eviction and no TTL at this layer.
#[async_trait]
pub trait TopicListCache: Send + Sync {
    async fn get(&self, key: &TopicListKey) -> Result<Option<TopicPage>, ListCacheError>;

    async fn put(&self, key: &TopicListKey, page: &TopicPage) -> Result<(), ListCacheError>;

    async fn invalidate_all(&self) -> Result<(), ListCacheError>;
}
