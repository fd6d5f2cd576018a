use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::{requests::CreateAnnouncementRequest, responses::AnnouncementResponse},
};

pub async fn create_announcement(
    service: &AnnouncementService,
    announcement_data: CreateAnnouncementRequest,
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

    // 公告归属发布者所在学院
    let college_id = match current_user.college_id {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Current user does not belong to a college",
            )));
        }
    };

    if announcement_data.title.trim().is_empty() || announcement_data.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Announcement title and body cannot be empty",
        )));
    }

    // 关联课程时课程必须存在
    if let Some(course_id) = announcement_data.course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseNotFound,
                    "Course not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Announcement creation failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .create_announcement(college_id, current_user.id, announcement_data)
        .await
    {
        Ok(announcement) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AnnouncementResponse { announcement },
            "公告发布成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Announcement creation failed: {e}"),
            )),
        ),
    }
}
