use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::topic::application::ports::outgoing::{
    ListCacheError, TopicListCache, TopicListKey, TopicPage,
};

/// Redis-backed list cache.
///
/// ## Redis data model
///
/// 1. **Per-page entry**
/// ```text
/// topics:list:{filter|page|size|field|direction} -> JSON(TopicPage)
/// ```
///
/// 2. **Key index**
/// ```text
/// topics:list:index -> SET(entry key)
/// ```
/// The index tracks every cached page so a mutation can clear all of them in
/// one round trip, whatever filter/pagination combination produced them.
///
/// There is no TTL; the only eviction is the full clear on topic mutations.
#[derive(Clone)]
pub struct TopicListCacheRedis {
    pool: Arc<Pool>,
}

const ENTRY_PREFIX: &str = "topics:list:";
const INDEX_KEY: &str = "topics:list:index";

impl TopicListCacheRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn entry_key(key: &TopicListKey) -> String {
        format!("{ENTRY_PREFIX}{}", key.token())
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, ListCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| ListCacheError::Backend(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl TopicListCache for TopicListCacheRedis {
    async fn get(&self, key: &TopicListKey) -> Result<Option<TopicPage>, ListCacheError> {
        let mut conn = self.get_conn().await?;

        let cached: Option<String> = conn
            .get(Self::entry_key(key))
            .await
            .map_err(|e| ListCacheError::Backend(e.to_string()))?;

        match cached {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| ListCacheError::Backend(format!("Corrupt cache entry: {e}"))),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &TopicListKey, page: &TopicPage) -> Result<(), ListCacheError> {
        let entry_key = Self::entry_key(key);
        let json = serde_json::to_string(page)
            .map_err(|e| ListCacheError::Backend(format!("Serialization error: {e}")))?;

        let mut conn = self.get_conn().await?;

        // Entry and index are written atomically so invalidate_all can never
        // miss a live entry.
        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&entry_key)
            .arg(json)
            .ignore()
            .cmd("SADD")
            .arg(INDEX_KEY)
            .arg(&entry_key)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| ListCacheError::Backend(e.to_string()))
    }

    async fn invalidate_all(&self) -> Result<(), ListCacheError> {
        let mut conn = self.get_conn().await?;

        let keys: Vec<String> = conn
            .smembers(INDEX_KEY)
            .await
            .map_err(|e| ListCacheError::Backend(e.to_string()))?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();
        for key in &keys {
            pipe.cmd("DEL").arg(key).ignore();
        }
        pipe.cmd("DEL").arg(INDEX_KEY).ignore();

        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| ListCacheError::Backend(e.to_string()))
    }
}
