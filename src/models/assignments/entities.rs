use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub created_by: i64,
    pub title: String,
    pub content: String,
    pub max_score: i32,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
