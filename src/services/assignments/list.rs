use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::requests::{AssignmentListParams, AssignmentListQuery},
};

pub async fn list_assignments(
    service: &AssignmentService,
    course_id: i64,
    params: AssignmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AssignmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: Some(course_id),
        search: params.search,
    };

    match storage.list_assignments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Assignment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve assignments: {e}"),
            )),
        ),
    }
}
