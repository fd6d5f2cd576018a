use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 公告创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub body: String,
    pub department: Option<String>,
    pub course_id: Option<i64>,
}

// 公告更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub department: Option<String>,
    pub course_id: Option<i64>,
}

// 公告查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 公告查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub college_id: Option<i64>,
    pub department: Option<String>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}
