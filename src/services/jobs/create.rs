use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JobPostingService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    jobs::{requests::CreateJobPostingRequest, responses::JobPostingResponse},
};

pub async fn create_job_posting(
    service: &JobPostingService,
    job_data: CreateJobPostingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let college_id = match current_user.college_id {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Current user does not belong to a college",
            )));
        }
    };

    if job_data.company.trim().is_empty() || job_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Company and title cannot be empty",
        )));
    }

    match storage
        .create_job_posting(college_id, current_user.id, job_data)
        .await
    {
        Ok(job_posting) => Ok(HttpResponse::Created().json(ApiResponse::success(
            JobPostingResponse { job_posting },
            "招聘信息发布成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Job posting creation failed: {e}"),
            )),
        ),
    }
}
