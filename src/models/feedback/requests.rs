use serde::Deserialize;
use ts_rs::TS;

// 反馈窗口设置更新请求（不存在则创建）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct UpsertFeedbackSettingsRequest {
    pub college_id: i64,
    pub semester: String,
    pub is_open: bool,
    #[serde(default)]
    pub allow_anonymous: bool,
    /// 开放时间（unix 秒）
    pub opens_at: Option<i64>,
    /// 关闭时间（unix 秒）
    pub closes_at: Option<i64>,
}

// 反馈窗口设置查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackSettingsParams {
    pub college_id: i64,
    pub semester: String,
}

// 课程反馈提交请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct SubmitFeedbackRequest {
    pub semester: String,
    /// 评分 1..=5
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

// 课程反馈查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackListParams {
    pub semester: Option<String>,
}
