use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 招聘信息创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct CreateJobPostingRequest {
    pub company: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub apply_url: Option<String>,
    /// 申请截止（unix 秒）
    pub deadline: Option<i64>,
}

// 招聘信息更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct UpdateJobPostingRequest {
    pub company: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub apply_url: Option<String>,
    pub deadline: Option<i64>,
}

// 招聘信息查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobPostingListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub company: Option<String>,
    pub search: Option<String>,
}

// 招聘信息查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobPostingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub college_id: Option<i64>,
    pub company: Option<String>,
    pub search: Option<String>,
}
