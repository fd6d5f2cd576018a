use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if course_data.code.trim().is_empty() || course_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Course code and name cannot be empty",
        )));
    }

    if course_data.credits <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Course credits must be positive",
        )));
    }

    // 同一学院内课程代码唯一
    match storage
        .get_course_by_college_and_code(course_data.college_id, &course_data.code)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CourseAlreadyExists,
                "Course code already exists in this college",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course creation failed: {e}"),
                )),
            );
        }
    }

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(CourseResponse { course }, "课程创建成功"))),
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}
