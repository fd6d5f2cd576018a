use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::UserInfoResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
