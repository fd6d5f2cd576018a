use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::responses::FeeRecordResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_fee_record(
    service: &FeeService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_fee_record_by_id(record_id).await {
        Ok(Some(fee_record)) => {
            // 学生只能查看自己的缴费记录
            if let Some(user) = RequireJWT::extract_user_claims(request)
                && user.role == UserRole::Student
                && fee_record.student_id != user.id
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::AccessDenied,
                    "Cannot view another student's fee record",
                )));
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FeeRecordResponse { fee_record },
                "Fee record retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeRecordNotFound,
            "Fee record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get fee record: {e}"),
            )),
        ),
    }
}
