use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::{CourseListParams, CourseListQuery},
};

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_courses_with_pagination(CourseListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
