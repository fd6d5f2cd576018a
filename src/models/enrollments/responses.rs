use super::entities::Enrollment;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 选课响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// 选课列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub items: Vec<Enrollment>,
    pub pagination: PaginationInfo,
}
