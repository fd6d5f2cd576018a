use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告实体
//
// 公告归属于学院，可选限定到院系和/或课程。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub college_id: i64,
    pub department: Option<String>,
    pub course_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub posted_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
