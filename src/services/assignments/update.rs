use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{requests::UpdateAssignmentRequest, responses::AssignmentResponse},
};

pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
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
                    format!("Failed to update assignment: {e}"),
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
                "Only the course teacher or an admin can update assignments",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update assignment: {e}"),
                )),
            );
        }
    }

    match storage.update_assignment(assignment_id, update_data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update assignment: {e}"),
            )),
        ),
    }
}
