pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{
    AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 发布公告
    pub async fn create_announcement(
        &self,
        announcement_data: CreateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, announcement_data, request).await
    }

    // 公告列表（限定在调用者所属学院）
    pub async fn list_announcements(
        &self,
        params: AnnouncementListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, params, request).await
    }

    // 公告详情
    pub async fn get_announcement(
        &self,
        announcement_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_announcement(self, announcement_id, request).await
    }

    // 更新公告
    pub async fn update_announcement(
        &self,
        announcement_id: i64,
        update_data: UpdateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, announcement_id, update_data, request).await
    }

    // 删除公告
    pub async fn delete_announcement(
        &self,
        announcement_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, announcement_id, request).await
    }
}
