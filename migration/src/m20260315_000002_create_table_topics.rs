use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Topics::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Topics::Message).text().not_null())
                    .col(
                        ColumnDef::new(Topics::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::Status)
                            .string_len(16)
                            .not_null()
                            .default("OPEN"),
                    )
                    .col(ColumnDef::new(Topics::CourseId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_course_id")
                            .from(Topics::Table, Topics::CourseId)
                            .to(Courses::Table, Courses::Id)
                            // Courses are reference data; never cascade topics away
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup when listing by course
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_course_id
                ON topics (course_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_course_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Title,
    Message,
    CreationDate,
    Status,
    CourseId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
