use super::entities::{FeedbackEntry, FeedbackSettings};
use serde::Serialize;
use ts_rs::TS;

// 反馈窗口设置响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackSettingsResponse {
    pub settings: FeedbackSettings,
}

// 反馈条目响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackEntryResponse {
    pub entry: FeedbackEntry,
}

// 课程反馈列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackListResponse {
    pub items: Vec<FeedbackEntry>,
    /// 平均评分
    pub average_rating: Option<f64>,
}
