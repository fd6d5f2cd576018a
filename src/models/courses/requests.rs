use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub college_id: Option<i64>,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 课程创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub college_id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub department: String,
    pub teacher_id: i64,
    pub credits: i32,
    pub semester: String,
}

// 课程更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub teacher_id: Option<i64>,
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub college_id: Option<i64>,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            college_id: params.college_id,
            department: params.department,
            semester: params.semester,
            teacher_id: params.teacher_id,
            search: params.search,
        }
    }
}
