use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub creation_date: DateTimeWithTimeZone,

    pub status: Status,

    pub course_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
    #[sea_orm(string_value = "SOLVED")]
    Solved,
}

impl From<Status> for TopicStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Open => TopicStatus::Open,
            Status::Closed => TopicStatus::Closed,
            Status::Solved => TopicStatus::Solved,
        }
    }
}

impl From<TopicStatus> for Status {
    fn from(status: TopicStatus) -> Self {
        match status {
            TopicStatus::Open => Status::Open,
            TopicStatus::Closed => Status::Closed,
            TopicStatus::Solved => Status::Solved,
        }
    }
}

impl Model {
    pub fn to_view(&self, course_name: String) -> TopicView {
        TopicView {
            id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
            creation_date: self.creation_date.into(),
            status: self.status.clone().into(),
            course_name,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
