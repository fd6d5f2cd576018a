use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_assignment(
    service: &AssignmentService,
    assignment_id: i64,
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

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment deletion failed: {e}"),
                )),
            );
        }
    };

    match AssignmentService::can_manage_course(&storage, assignment.course_id, &current_user).await
    {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                "Only the course teacher or an admin can delete assignments",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment deletion failed: {e}"),
                )),
            );
        }
    }

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Assignment deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Assignment deletion failed: {e}"),
            )),
        ),
    }
}
