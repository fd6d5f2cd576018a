use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::CollegeId).big_integer().null())
                    .col(ColumnDef::new(Users::Department).string().null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CollegeId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Department).string().not_null())
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Semester).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学院内课程代码唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_college_code")
                    .table(Courses::Table)
                    .col(Courses::CollegeId)
                    .col(Courses::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::Semester).string().not_null())
                    .col(ColumnDef::new(Enrollments::Status).string().not_null())
                    .col(ColumnDef::new(Enrollments::Grade).string().null())
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每学期每门课程只能有一条选课记录
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_course_semester")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .col(Enrollments::CourseId)
                    .col(Enrollments::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Content).text().not_null())
                    .col(ColumnDef::new(Assignments::MaxScore).integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::Deadline)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Date).string().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::MarkedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每门课程每天只能有一条考勤记录
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_course_student_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::CourseId)
                    .col(AttendanceRecords::StudentId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建缴费记录表
        manager
            .create_table(
                Table::create()
                    .table(FeeRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeeRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeRecords::Semester).string().not_null())
                    .col(ColumnDef::new(FeeRecords::FeeType).string().not_null())
                    .col(ColumnDef::new(FeeRecords::Amount).big_integer().not_null())
                    .col(ColumnDef::new(FeeRecords::Status).string().not_null())
                    .col(
                        ColumnDef::new(FeeRecords::DueDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeRecords::PaidAt).big_integer().null())
                    .col(ColumnDef::new(FeeRecords::PaymentMethod).string().null())
                    .col(ColumnDef::new(FeeRecords::TransactionId).string().null())
                    .col(
                        ColumnDef::new(FeeRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeRecords::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeeRecords::Table, FeeRecords::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每学期每种费用只能有一条记录
        manager
            .create_index(
                Index::create()
                    .name("idx_fee_records_student_semester_type")
                    .table(FeeRecords::Table)
                    .col(FeeRecords::StudentId)
                    .col(FeeRecords::Semester)
                    .col(FeeRecords::FeeType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Announcements::CollegeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcements::Department).string().null())
                    .col(ColumnDef::new(Announcements::CourseId).big_integer().null())
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Body).text().not_null())
                    .col(
                        ColumnDef::new(Announcements::PostedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Announcements::Table, Announcements::PostedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建招聘信息表
        manager
            .create_table(
                Table::create()
                    .table(JobPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JobPostings::CollegeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobPostings::Company).string().not_null())
                    .col(ColumnDef::new(JobPostings::Title).string().not_null())
                    .col(ColumnDef::new(JobPostings::Description).text().not_null())
                    .col(ColumnDef::new(JobPostings::Location).string().null())
                    .col(ColumnDef::new(JobPostings::ApplyUrl).string().null())
                    .col(ColumnDef::new(JobPostings::Deadline).big_integer().null())
                    .col(
                        ColumnDef::new(JobPostings::PostedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPostings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPostings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JobPostings::Table, JobPostings::PostedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程反馈表
        manager
            .create_table(
                Table::create()
                    .table(FeedbackEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::Semester)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::Rating)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeedbackEntries::Comment).text().null())
                    .col(
                        ColumnDef::new(FeedbackEntries::Anonymous)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeedbackEntries::Table, FeedbackEntries::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeedbackEntries::Table, FeedbackEntries::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每学期对每门课程只能提交一次反馈
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_course_student_semester")
                    .table(FeedbackEntries::Table)
                    .col(FeedbackEntries::CourseId)
                    .col(FeedbackEntries::StudentId)
                    .col(FeedbackEntries::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    CollegeId,
    Department,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CollegeId,
    Code,
    Name,
    Description,
    Department,
    TeacherId,
    Credits,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentId,
    CourseId,
    Semester,
    Status,
    Grade,
    EnrolledAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    CreatedBy,
    Title,
    Content,
    MaxScore,
    Deadline,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    #[sea_orm(iden = "attendance_records")]
    Table,
    Id,
    CourseId,
    StudentId,
    Date,
    Status,
    MarkedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FeeRecords {
    #[sea_orm(iden = "fee_records")]
    Table,
    Id,
    StudentId,
    Semester,
    FeeType,
    Amount,
    Status,
    DueDate,
    PaidAt,
    PaymentMethod,
    TransactionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    CollegeId,
    Department,
    CourseId,
    Title,
    Body,
    PostedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum JobPostings {
    #[sea_orm(iden = "job_postings")]
    Table,
    Id,
    CollegeId,
    Company,
    Title,
    Description,
    Location,
    ApplyUrl,
    Deadline,
    PostedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeedbackEntries {
    #[sea_orm(iden = "feedback_entries")]
    Table,
    Id,
    CourseId,
    StudentId,
    Semester,
    Rating,
    Comment,
    Anonymous,
    CreatedAt,
}
