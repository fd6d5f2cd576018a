use super::entities::Course;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
}

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}
