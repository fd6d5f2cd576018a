use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JobPostingService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_job_posting(
    service: &JobPostingService,
    job_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_job_posting(job_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Job posting deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobPostingNotFound,
            "Job posting not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Job posting deletion failed: {e}"),
            )),
        ),
    }
}
