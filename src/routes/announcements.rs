use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::{
    AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AnnouncementService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AnnouncementService 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

// HTTP处理程序
pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<AnnouncementListParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(query.into_inner(), &req)
        .await
}

pub async fn create_announcement(
    req: HttpRequest,
    announcement_data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .create_announcement(announcement_data.into_inner(), &req)
        .await
}

pub async fn get_announcement(
    req: HttpRequest,
    announcement_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .get_announcement(announcement_id.0, &req)
        .await
}

pub async fn update_announcement(
    req: HttpRequest,
    announcement_id: SafeIDI64,
    update_data: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .update_announcement(announcement_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    announcement_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(announcement_id.0, &req)
        .await
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(
                        web::post()
                            .to(create_announcement)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_announcement))
                    .route(
                        web::put()
                            .to(update_announcement)
                            // 发布者本人或管理员（服务层校验归属）
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_announcement)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
