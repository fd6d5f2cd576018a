use super::entities::JobPosting;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 招聘信息响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobPostingResponse {
    pub job_posting: JobPosting,
}

// 招聘信息列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobPostingListResponse {
    pub items: Vec<JobPosting>,
    pub pagination: PaginationInfo,
}
