use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JobPostingService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    jobs::requests::{JobPostingListParams, JobPostingListQuery},
};

pub async fn list_job_postings(
    service: &JobPostingService,
    params: JobPostingListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let college_id = RequireJWT::extract_user_claims(request).and_then(|user| user.college_id);

    let query = JobPostingListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        college_id,
        company: params.company,
        search: params.search,
    };

    match storage.list_job_postings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Job posting list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve job postings: {e}"),
            )),
        ),
    }
}
