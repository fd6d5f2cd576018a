use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub college_id: i64,
    /// 课程代码，学院内唯一
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub department: String,
    pub teacher_id: i64,
    pub credits: i32,
    pub semester: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
