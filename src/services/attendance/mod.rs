pub mod list;
pub mod mark;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceListParams, MarkAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 批量标记考勤（同一天重复标记覆盖旧记录）
    pub async fn mark_attendance(
        &self,
        course_id: i64,
        mark_request: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, course_id, mark_request, request).await
    }

    // 课程考勤列表
    pub async fn list_attendance(
        &self,
        course_id: i64,
        params: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, course_id, params, request).await
    }

    // 学生考勤汇总
    pub async fn attendance_summary(
        &self,
        course_id: i64,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::attendance_summary(self, course_id, student_id, request).await
    }
}
