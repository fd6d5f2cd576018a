pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::jobs::requests::{
    CreateJobPostingRequest, JobPostingListParams, UpdateJobPostingRequest,
};
use crate::storage::Storage;

pub struct JobPostingService {
    storage: Option<Arc<dyn Storage>>,
}

impl JobPostingService {
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

    // 发布招聘信息
    pub async fn create_job_posting(
        &self,
        job_data: CreateJobPostingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_job_posting(self, job_data, request).await
    }

    // 招聘信息列表
    pub async fn list_job_postings(
        &self,
        params: JobPostingListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_job_postings(self, params, request).await
    }

    // 招聘信息详情
    pub async fn get_job_posting(
        &self,
        job_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_job_posting(self, job_id, request).await
    }

    // 更新招聘信息
    pub async fn update_job_posting(
        &self,
        job_id: i64,
        update_data: UpdateJobPostingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_job_posting(self, job_id, update_data, request).await
    }

    // 删除招聘信息
    pub async fn delete_job_posting(
        &self,
        job_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_job_posting(self, job_id, request).await
    }
}
