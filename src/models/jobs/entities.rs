use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 招聘信息实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobPosting {
    pub id: i64,
    pub college_id: i64,
    pub company: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub apply_url: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub posted_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
