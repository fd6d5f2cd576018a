use super::entities::EnrollmentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 选课请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollRequest {
    pub course_id: i64,
    pub semester: String,
    /// 管理员可代学生选课；学生自助时忽略
    pub student_id: Option<i64>,
}

// 选课记录更新请求（成绩、状态）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateEnrollmentRequest {
    pub status: Option<EnrollmentStatus>,
    pub grade: Option<String>,
}

// 选课查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub semester: Option<String>,
    pub status: Option<EnrollmentStatus>,
}

// 选课查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
    pub semester: Option<String>,
    pub status: Option<EnrollmentStatus>,
}
