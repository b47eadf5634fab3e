use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;

use crate::topic::application::ports::outgoing::{
    NewTopic, PageRequest, SortDirection, SortField, TopicChanges, TopicDetailView, TopicPage,
    TopicSort, TopicStore, TopicStoreError, TopicView,
};

use super::sea_orm_entity::{courses, topics};

//
// ──────────────────────────────────────────────────────────
// Row projections (topic joined with its course name)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, FromQueryResult)]
struct TopicRow {
    id: i64,
    title: String,
    message: String,
    creation_date: sea_orm::prelude::DateTimeWithTimeZone,
    status: topics::Status,
    course_name: String,
}

impl TopicRow {
    fn into_view(self) -> TopicView {
        TopicView {
            id: self.id,
            title: self.title,
            message: self.message,
            creation_date: self.creation_date.into(),
            status: self.status.into(),
            course_name: self.course_name,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct TopicDetailRow {
    id: i64,
    title: String,
    message: String,
    creation_date: sea_orm::prelude::DateTimeWithTimeZone,
    status: topics::Status,
    course_id: i64,
    course_name: String,
}

impl TopicDetailRow {
    fn into_view(self) -> TopicDetailView {
        TopicDetailView {
            id: self.id,
            title: self.title,
            message: self.message,
            creation_date: self.creation_date.into(),
            status: self.status.into(),
            course_id: self.course_id,
            course_name: self.course_name,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Store implementation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct TopicStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn course_name(&self, course_id: i64) -> Result<String, TopicStoreError> {
        let course = courses::Entity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                TopicStoreError::DatabaseError(format!("course {course_id} missing for topic"))
            })?;

        Ok(course.name)
    }
}

fn map_db_err(e: DbErr) -> TopicStoreError {
    TopicStoreError::DatabaseError(e.to_string())
}

fn sort_column(field: SortField) -> topics::Column {
    match field {
        SortField::Id => topics::Column::Id,
        SortField::Title => topics::Column::Title,
        SortField::CreationDate => topics::Column::CreationDate,
        SortField::Status => topics::Column::Status,
    }
}

#[async_trait]
impl TopicStore for TopicStorePostgres {
    async fn list(
        &self,
        course_name: Option<&str>,
        sort: &TopicSort,
        page: &PageRequest,
    ) -> Result<TopicPage, TopicStoreError> {
        let mut query =
            topics::Entity::find().join(JoinType::InnerJoin, topics::Relation::Course.def());

        if let Some(name) = course_name {
            query = query.filter(courses::Column::Name.eq(name));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let total_pages = if page.size == 0 {
            0
        } else {
            total.div_ceil(page.size)
        };

        // An offset past u64 range cannot address any row; such a page is
        // empty by definition and must not wrap around.
        let Some(offset) = page.page.checked_mul(page.size) else {
            return Ok(TopicPage {
                items: Vec::new(),
                page: page.page,
                size: page.size,
                total_elements: total,
                total_pages,
            });
        };

        let column = sort_column(sort.field);
        query = match sort.direction {
            SortDirection::Asc => query.order_by_asc(column),
            SortDirection::Desc => query.order_by_desc(column),
        };

        let rows: Vec<TopicRow> = query
            .select_only()
            .column(topics::Column::Id)
            .column(topics::Column::Title)
            .column(topics::Column::Message)
            .column(topics::Column::CreationDate)
            .column(topics::Column::Status)
            .column_as(courses::Column::Name, "course_name")
            .offset(offset)
            .limit(page.size)
            .into_model::<TopicRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(TopicPage {
            items: rows.into_iter().map(TopicRow::into_view).collect(),
            page: page.page,
            size: page.size,
            total_elements: total,
            total_pages,
        })
    }

    async fn find_detail(&self, id: i64) -> Result<Option<TopicDetailView>, TopicStoreError> {
        let row = topics::Entity::find_by_id(id)
            .join(JoinType::InnerJoin, topics::Relation::Course.def())
            .select_only()
            .column(topics::Column::Id)
            .column(topics::Column::Title)
            .column(topics::Column::Message)
            .column(topics::Column::CreationDate)
            .column(topics::Column::Status)
            .column(topics::Column::CourseId)
            .column_as(courses::Column::Name, "course_name")
            .into_model::<TopicDetailRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(TopicDetailRow::into_view))
    }

    async fn insert(&self, data: NewTopic) -> Result<TopicView, TopicStoreError> {
        let active = topics::ActiveModel {
            title: Set(data.title),
            message: Set(data.message),
            creation_date: Set(Utc::now().into()),
            status: Set(topics::Status::Open),
            course_id: Set(data.course_id),
            ..Default::default()
        };

        let inserted: topics::Model = active.insert(&*self.db).await.map_err(map_db_err)?;

        let course_name = self.course_name(inserted.course_id).await?;
        Ok(inserted.to_view(course_name))
    }

    async fn update(&self, id: i64, changes: TopicChanges) -> Result<TopicView, TopicStoreError> {
        // Existence is checked before the write; an update is never inferred
        // from a failed statement.
        let existing = topics::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TopicStoreError::TopicNotFound)?;

        let course_id = existing.course_id;

        let mut active: topics::ActiveModel = existing.into();
        active.title = Set(changes.title);
        active.message = Set(changes.message);

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        let course_name = self.course_name(course_id).await?;
        Ok(updated.to_view(course_name))
    }

    async fn delete(&self, id: i64) -> Result<(), TopicStoreError> {
        topics::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TopicStoreError::TopicNotFound)?;

        let result = topics::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TopicStoreError::TopicNotFound);
        }

        Ok(())
    }
}
