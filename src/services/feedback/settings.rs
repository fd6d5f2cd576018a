use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    feedback::{
        requests::{FeedbackSettingsParams, UpsertFeedbackSettingsRequest},
        responses::FeedbackSettingsResponse,
    },
};

pub async fn get_settings(
    service: &FeedbackService,
    params: FeedbackSettingsParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .get_feedback_settings(params.college_id, &params.semester)
        .await
    {
        Ok(Some(settings)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeedbackSettingsResponse { settings },
            "Feedback settings retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeedbackSettingsNotFound,
            "Feedback settings not found for this college and semester",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get feedback settings: {e}"),
            )),
        ),
    }
}

pub async fn upsert_settings(
    service: &FeedbackService,
    settings_data: UpsertFeedbackSettingsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 开放区间若都给了就要合法
    if let (Some(opens_at), Some(closes_at)) = (settings_data.opens_at, settings_data.closes_at)
        && opens_at >= closes_at
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "opens_at must be before closes_at",
        )));
    }

    match storage
        .upsert_feedback_settings(current_user_id, settings_data)
        .await
    {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeedbackSettingsResponse { settings },
            "反馈窗口设置已保存",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save feedback settings: {e}"),
            )),
        ),
    }
}
