use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::requests::{FeeListParams, FeeListQuery},
};

pub async fn list_fee_records(
    service: &FeeService,
    params: FeeListParams,
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

    // 学生只能看到自己的缴费记录，过滤参数强制为本人
    let student_id = if current_user.role == UserRole::Student {
        Some(current_user.id)
    } else {
        params.student_id
    };

    let query = FeeListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id,
        semester: params.semester,
        fee_type: params.fee_type,
        status: params.status,
    };

    match storage.list_fee_records_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Fee record list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve fee records: {e}"),
            )),
        ),
    }
}
