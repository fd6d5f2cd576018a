use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn attendance_summary(
    service: &AttendanceService,
    course_id: i64,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查自己的汇总
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && user.role == UserRole::Student
        && user.id != student_id
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccessDenied,
            "Cannot view another student's attendance summary",
        )));
    }

    match storage.get_attendance_summary(course_id, student_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Attendance summary retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance summary: {e}"),
            )),
        ),
    }
}
