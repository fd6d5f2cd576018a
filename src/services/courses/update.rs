use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(credits) = update_data.credits
        && credits <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Course credits must be positive",
        )));
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse { course },
            "Course updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Failed to update course: {e}"),
        ))),
    }
}
