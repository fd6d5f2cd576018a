use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{requests::UpdateEnrollmentRequest, responses::EnrollmentResponse},
};

// 教师/管理员登记成绩或调整状态
pub async fn update_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    update_data: UpdateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if update_data.status.is_none() && update_data.grade.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Nothing to update",
        )));
    }

    match storage.update_enrollment(enrollment_id, update_data).await {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentResponse { enrollment },
            "Enrollment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update enrollment: {e}"),
            )),
        ),
    }
}
