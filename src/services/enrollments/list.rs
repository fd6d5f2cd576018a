use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::requests::{EnrollmentListParams, EnrollmentListQuery},
};

// 当前学生的选课列表
pub async fn list_my_enrollments(
    service: &EnrollmentService,
    params: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: None,
        student_id: Some(student_id),
        semester: params.semester,
        status: params.status,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve enrollments: {e}"),
            )),
        ),
    }
}

// 某课程的选课列表（教师/管理员）
pub async fn list_course_enrollments(
    service: &EnrollmentService,
    course_id: i64,
    params: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: Some(course_id),
        student_id: None,
        semester: params.semester,
        status: params.status,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve enrollments: {e}"),
            )),
        ),
    }
}
