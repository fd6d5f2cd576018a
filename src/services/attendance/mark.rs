use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::MarkAttendanceRequest, responses::MarkAttendanceResponse},
};
use crate::services::AssignmentService;
use crate::utils::validate::validate_date;

pub async fn mark_attendance(
    service: &AttendanceService,
    course_id: i64,
    mark_request: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match AssignmentService::current_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if let Err(msg) = validate_date(&mark_request.date) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::DateInvalid, msg))
        );
    }

    if mark_request.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Attendance entries cannot be empty",
        )));
    }

    // 课程必须存在
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Attendance marking failed: {e}"),
                )),
            );
        }
    }

    // 只有任课教师或管理员能标记考勤
    match AssignmentService::can_manage_course(&storage, course_id, &current_user).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                "Only the course teacher or an admin can mark attendance",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Attendance marking failed: {e}"),
                )),
            );
        }
    }

    match storage
        .upsert_attendance(
            course_id,
            current_user.id,
            &mark_request.date,
            &mark_request.entries,
        )
        .await
    {
        Ok(marked) => {
            info!(
                "Attendance marked for course {} on {}: {} entries",
                course_id, mark_request.date, marked
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkAttendanceResponse { marked },
                "考勤标记成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Attendance marking failed: {e}"),
            )),
        ),
    }
}
