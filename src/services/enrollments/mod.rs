pub mod drop;
pub mod enroll;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{
    EnrollRequest, EnrollmentListParams, UpdateEnrollmentRequest,
};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 选课（学生自助或管理员代选）
    pub async fn enroll(
        &self,
        enroll_request: EnrollRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, enroll_request, request).await
    }

    // 退课
    pub async fn drop_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        drop::drop_enrollment(self, enrollment_id, request).await
    }

    // 当前学生的选课列表
    pub async fn list_my_enrollments(
        &self,
        params: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_enrollments(self, params, request).await
    }

    // 某课程的选课列表（教师/管理员）
    pub async fn list_course_enrollments(
        &self,
        course_id: i64,
        params: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_course_enrollments(self, course_id, params, request).await
    }

    // 更新选课记录（成绩、状态）
    pub async fn update_enrollment(
        &self,
        enrollment_id: i64,
        update_data: UpdateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_enrollment(self, enrollment_id, update_data, request).await
    }
}
