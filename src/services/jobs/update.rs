use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JobPostingService;
use crate::models::{
    ApiResponse, ErrorCode,
    jobs::{requests::UpdateJobPostingRequest, responses::JobPostingResponse},
};

pub async fn update_job_posting(
    service: &JobPostingService,
    job_id: i64,
    update_data: UpdateJobPostingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_job_posting(job_id, update_data).await {
        Ok(Some(job_posting)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            JobPostingResponse { job_posting },
            "Job posting updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobPostingNotFound,
            "Job posting not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update job posting: {e}"),
            )),
        ),
    }
}
