pub mod list;
pub mod settings;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedback::requests::{
    FeedbackListParams, FeedbackSettingsParams, SubmitFeedbackRequest,
    UpsertFeedbackSettingsRequest,
};
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取反馈窗口设置
    pub async fn get_settings(
        &self,
        params: FeedbackSettingsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        settings::get_settings(self, params, request).await
    }

    // 更新反馈窗口设置（不存在则创建）
    pub async fn upsert_settings(
        &self,
        settings_data: UpsertFeedbackSettingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        settings::upsert_settings(self, settings_data, request).await
    }

    // 提交课程反馈（学生）
    pub async fn submit_feedback(
        &self,
        course_id: i64,
        feedback_data: SubmitFeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, course_id, feedback_data, request).await
    }

    // 课程反馈列表（教师/管理员）
    pub async fn list_feedback(
        &self,
        course_id: i64,
        params: FeedbackListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_feedback(self, course_id, params, request).await
    }
}
