use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 反馈窗口设置表 ====================
        manager
            .create_table(
                Table::create()
                    .table(FeedbackSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackSettings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::CollegeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::Semester)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::IsOpen)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::AllowAnonymous)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeedbackSettings::OpensAt).big_integer().null())
                    .col(
                        ColumnDef::new(FeedbackSettings::ClosesAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::UpdatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学院每学期只有一份反馈窗口设置
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_settings_college_semester")
                    .table(FeedbackSettings::Table)
                    .col(FeedbackSettings::CollegeId)
                    .col(FeedbackSettings::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackSettings::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum FeedbackSettings {
    #[sea_orm(iden = "feedback_settings")]
    Table,
    Id,
    CollegeId,
    Semester,
    IsOpen,
    AllowAnonymous,
    OpensAt,
    ClosesAt,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
