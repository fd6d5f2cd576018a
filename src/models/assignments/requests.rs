use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 作业创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub content: String,
    pub max_score: i32,
    /// 截止时间（unix 秒）
    pub deadline: i64,
}

// 作业更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub max_score: Option<i32>,
    pub deadline: Option<i64>,
}

// 作业查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 作业查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}
