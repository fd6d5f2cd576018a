use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::{requests::UpdateAnnouncementRequest, responses::AnnouncementResponse},
};

pub async fn update_announcement(
    service: &AnnouncementService,
    announcement_id: i64,
    update_data: UpdateAnnouncementRequest,
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

    let announcement = match storage.get_announcement_by_id(announcement_id).await {
        Ok(Some(announcement)) => announcement,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AnnouncementNotFound,
                "Announcement not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update announcement: {e}"),
                )),
            );
        }
    };

    // 发布者本人或管理员才能改
    if current_user.role != UserRole::Admin && announcement.posted_by != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccessDenied,
            "Only the poster or an admin can update this announcement",
        )));
    }

    match storage
        .update_announcement(announcement_id, update_data)
        .await
    {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnnouncementResponse { announcement },
            "Announcement updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update announcement: {e}"),
            )),
        ),
    }
}
