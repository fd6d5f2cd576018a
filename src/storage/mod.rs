use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过学院和课程代码获取课程
    async fn get_course_by_college_and_code(
        &self,
        college_id: i64,
        code: &str,
    ) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    // 学生选课
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 获取某学生某学期对某课程的选课记录
    async fn get_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Option<Enrollment>>;
    // 列出选课记录
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 更新选课记录（状态、成绩）
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;

    /// 作业管理方法
    // 发布作业
    async fn create_assignment(
        &self,
        course_id: i64,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 批量标记考勤，同一天重复标记覆盖旧记录
    async fn upsert_attendance(
        &self,
        course_id: i64,
        marked_by: i64,
        date: &str,
        entries: &[AttendanceEntry],
    ) -> Result<usize>;
    // 列出考勤记录
    async fn list_attendance(
        &self,
        course_id: i64,
        params: &AttendanceListParams,
    ) -> Result<Vec<AttendanceRecord>>;
    // 学生考勤汇总
    async fn get_attendance_summary(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<AttendanceSummaryResponse>;

    /// 缴费管理方法
    // 创建缴费记录
    async fn create_fee_record(&self, record: CreateFeeRecordRequest) -> Result<FeeRecord>;
    // 通过ID获取缴费记录
    async fn get_fee_record_by_id(&self, id: i64) -> Result<Option<FeeRecord>>;
    // 获取某学生某学期某类型的缴费记录
    async fn get_fee_record(
        &self,
        student_id: i64,
        semester: &str,
        fee_type: &FeeType,
    ) -> Result<Option<FeeRecord>>;
    // 列出缴费记录
    async fn list_fee_records_with_pagination(&self, query: FeeListQuery)
    -> Result<FeeListResponse>;
    // 标记缴费完成
    async fn mark_fee_paid(
        &self,
        id: i64,
        payment_method: &str,
        transaction_id: &str,
    ) -> Result<Option<FeeRecord>>;
    // 列出待缴费记录及对应学生（用于批量催缴）
    async fn list_payable_fee_records(
        &self,
        semester: &str,
        fee_type: Option<&FeeType>,
    ) -> Result<Vec<(FeeRecord, User)>>;

    /// 课程反馈管理方法
    // 更新反馈窗口设置（不存在则创建）
    async fn upsert_feedback_settings(
        &self,
        updated_by: i64,
        settings: UpsertFeedbackSettingsRequest,
    ) -> Result<FeedbackSettings>;
    // 获取反馈窗口设置
    async fn get_feedback_settings(
        &self,
        college_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackSettings>>;
    // 提交课程反馈
    async fn create_feedback_entry(
        &self,
        course_id: i64,
        student_id: i64,
        feedback: SubmitFeedbackRequest,
    ) -> Result<FeedbackEntry>;
    // 获取某学生某学期对某课程的反馈
    async fn get_feedback_entry(
        &self,
        course_id: i64,
        student_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackEntry>>;
    // 列出课程反馈及平均评分
    async fn list_feedback_entries(
        &self,
        course_id: i64,
        semester: Option<&str>,
    ) -> Result<FeedbackListResponse>;

    /// 公告管理方法
    // 发布公告
    async fn create_announcement(
        &self,
        college_id: i64,
        posted_by: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    // 通过ID获取公告
    async fn get_announcement_by_id(&self, id: i64) -> Result<Option<Announcement>>;
    // 列出公告
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse>;
    // 更新公告
    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    // 删除公告
    async fn delete_announcement(&self, id: i64) -> Result<bool>;

    /// 招聘信息管理方法
    // 发布招聘信息
    async fn create_job_posting(
        &self,
        college_id: i64,
        posted_by: i64,
        job: CreateJobPostingRequest,
    ) -> Result<JobPosting>;
    // 通过ID获取招聘信息
    async fn get_job_posting_by_id(&self, id: i64) -> Result<Option<JobPosting>>;
    // 列出招聘信息
    async fn list_job_postings_with_pagination(
        &self,
        query: JobPostingListQuery,
    ) -> Result<JobPostingListResponse>;
    // 更新招聘信息
    async fn update_job_posting(
        &self,
        id: i64,
        update: UpdateJobPostingRequest,
    ) -> Result<Option<JobPosting>>;
    // 删除招聘信息
    async fn delete_job_posting(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
