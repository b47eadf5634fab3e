use async_trait::async_trait;

/// Read-only projection of a course. Courses are reference data owned by
/// another part of the forum; this component only resolves foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<CourseRecord>, CourseStoreError>;
}
