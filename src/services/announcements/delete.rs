use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_announcement(
    service: &AnnouncementService,
    announcement_id: i64,
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
                    format!("Announcement deletion failed: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && announcement.posted_by != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccessDenied,
            "Only the poster or an admin can delete this announcement",
        )));
    }

    match storage.delete_announcement(announcement_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Announcement deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Announcement deletion failed: {e}"),
            )),
        ),
    }
}
