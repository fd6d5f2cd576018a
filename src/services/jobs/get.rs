use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JobPostingService;
use crate::models::jobs::responses::JobPostingResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_job_posting(
    service: &JobPostingService,
    job_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_job_posting_by_id(job_id).await {
        Ok(Some(job_posting)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            JobPostingResponse { job_posting },
            "Job posting retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobPostingNotFound,
            "Job posting not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get job posting: {e}"),
            )),
        ),
    }
}
