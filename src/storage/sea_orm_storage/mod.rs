//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod assignments;
mod attendance;
mod courses;
mod enrollments;
mod feedback;
mod fees;
mod job_postings;
mod users;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceEntry, AttendanceListParams},
        responses::AttendanceSummaryResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::Enrollment,
        requests::{EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::EnrollmentListResponse,
    },
    feedback::{
        entities::{FeedbackEntry, FeedbackSettings},
        requests::{SubmitFeedbackRequest, UpsertFeedbackSettingsRequest},
        responses::FeedbackListResponse,
    },
    fees::{
        entities::{FeeRecord, FeeType},
        requests::{CreateFeeRecordRequest, FeeListQuery},
        responses::FeeListResponse,
    },
    jobs::{
        entities::JobPosting,
        requests::{CreateJobPostingRequest, JobPostingListQuery, UpdateJobPostingRequest},
        responses::JobPostingListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_college_and_code(
        &self,
        college_id: i64,
        code: &str,
    ) -> Result<Option<Course>> {
        self.get_course_by_college_and_code_impl(college_id, code)
            .await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id, semester)
            .await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn get_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, course_id, semester)
            .await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(id, update).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        course_id: i64,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(course_id, created_by, assignment)
            .await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        course_id: i64,
        marked_by: i64,
        date: &str,
        entries: &[AttendanceEntry],
    ) -> Result<usize> {
        self.upsert_attendance_impl(course_id, marked_by, date, entries)
            .await
    }

    async fn list_attendance(
        &self,
        course_id: i64,
        params: &AttendanceListParams,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(course_id, params).await
    }

    async fn get_attendance_summary(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<AttendanceSummaryResponse> {
        self.get_attendance_summary_impl(course_id, student_id)
            .await
    }

    // 缴费模块
    async fn create_fee_record(&self, record: CreateFeeRecordRequest) -> Result<FeeRecord> {
        self.create_fee_record_impl(record).await
    }

    async fn get_fee_record_by_id(&self, id: i64) -> Result<Option<FeeRecord>> {
        self.get_fee_record_by_id_impl(id).await
    }

    async fn get_fee_record(
        &self,
        student_id: i64,
        semester: &str,
        fee_type: &FeeType,
    ) -> Result<Option<FeeRecord>> {
        self.get_fee_record_impl(student_id, semester, fee_type)
            .await
    }

    async fn list_fee_records_with_pagination(
        &self,
        query: FeeListQuery,
    ) -> Result<FeeListResponse> {
        self.list_fee_records_with_pagination_impl(query).await
    }

    async fn mark_fee_paid(
        &self,
        id: i64,
        payment_method: &str,
        transaction_id: &str,
    ) -> Result<Option<FeeRecord>> {
        self.mark_fee_paid_impl(id, payment_method, transaction_id)
            .await
    }

    async fn list_payable_fee_records(
        &self,
        semester: &str,
        fee_type: Option<&FeeType>,
    ) -> Result<Vec<(FeeRecord, User)>> {
        self.list_payable_fee_records_impl(semester, fee_type).await
    }

    // 课程反馈模块
    async fn upsert_feedback_settings(
        &self,
        updated_by: i64,
        settings: UpsertFeedbackSettingsRequest,
    ) -> Result<FeedbackSettings> {
        self.upsert_feedback_settings_impl(updated_by, settings)
            .await
    }

    async fn get_feedback_settings(
        &self,
        college_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackSettings>> {
        self.get_feedback_settings_impl(college_id, semester).await
    }

    async fn create_feedback_entry(
        &self,
        course_id: i64,
        student_id: i64,
        feedback: SubmitFeedbackRequest,
    ) -> Result<FeedbackEntry> {
        self.create_feedback_entry_impl(course_id, student_id, feedback)
            .await
    }

    async fn get_feedback_entry(
        &self,
        course_id: i64,
        student_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackEntry>> {
        self.get_feedback_entry_impl(course_id, student_id, semester)
            .await
    }

    async fn list_feedback_entries(
        &self,
        course_id: i64,
        semester: Option<&str>,
    ) -> Result<FeedbackListResponse> {
        self.list_feedback_entries_impl(course_id, semester).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        college_id: i64,
        posted_by: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(college_id, posted_by, announcement)
            .await
    }

    async fn get_announcement_by_id(&self, id: i64) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id).await
    }

    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_with_pagination_impl(query).await
    }

    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, update).await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 招聘信息模块
    async fn create_job_posting(
        &self,
        college_id: i64,
        posted_by: i64,
        job: CreateJobPostingRequest,
    ) -> Result<JobPosting> {
        self.create_job_posting_impl(college_id, posted_by, job)
            .await
    }

    async fn get_job_posting_by_id(&self, id: i64) -> Result<Option<JobPosting>> {
        self.get_job_posting_by_id_impl(id).await
    }

    async fn list_job_postings_with_pagination(
        &self,
        query: JobPostingListQuery,
    ) -> Result<JobPostingListResponse> {
        self.list_job_postings_with_pagination_impl(query).await
    }

    async fn update_job_posting(
        &self,
        id: i64,
        update: UpdateJobPostingRequest,
    ) -> Result<Option<JobPosting>> {
        self.update_job_posting_impl(id, update).await
    }

    async fn delete_job_posting(&self, id: i64) -> Result<bool> {
        self.delete_job_posting_impl(id).await
    }
}
