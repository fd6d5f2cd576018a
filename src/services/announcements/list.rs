use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::requests::{AnnouncementListParams, AnnouncementListQuery},
};

pub async fn list_announcements(
    service: &AnnouncementService,
    params: AnnouncementListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 列表范围限定在调用者所在学院；无学院的账号（如平台管理员）看全部
    let college_id =
        RequireJWT::extract_user_claims(request).and_then(|user| user.college_id);

    let query = AnnouncementListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        college_id,
        department: params.department,
        course_id: params.course_id,
        search: params.search,
    };

    match storage.list_announcements_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcement list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve announcements: {e}"),
            )),
        ),
    }
}
