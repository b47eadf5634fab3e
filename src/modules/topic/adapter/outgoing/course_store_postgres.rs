use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::topic::application::ports::outgoing::{CourseRecord, CourseStore, CourseStoreError};

use super::sea_orm_entity::courses;

#[derive(Debug, Clone)]
pub struct CourseStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for CourseStorePostgres {
    async fn find_by_id(&self, id: i64) -> Result<Option<CourseRecord>, CourseStoreError> {
        let course = courses::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CourseStoreError::DatabaseError(e.to_string()))?;

        Ok(course.map(|c| c.to_record()))
    }
}
