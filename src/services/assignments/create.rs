use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{requests::CreateAssignmentRequest, responses::AssignmentResponse},
};

pub async fn create_assignment(
    service: &AssignmentService,
    course_id: i64,
    assignment_data: CreateAssignmentRequest,
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

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Assignment title cannot be empty",
        )));
    }

    if assignment_data.max_score <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Max score must be positive",
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
                    format!("Assignment creation failed: {e}"),
                )),
            );
        }
    }

    match AssignmentService::can_manage_course(&storage, course_id, &current_user).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                "Only the course teacher or an admin can publish assignments",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment creation failed: {e}"),
                )),
            );
        }
    }

    match storage
        .create_assignment(course_id, current_user.id, assignment_data)
        .await
    {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "作业发布成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Assignment creation failed: {e}"),
            )),
        ),
    }
}
