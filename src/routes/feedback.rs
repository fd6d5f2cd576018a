use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedback::requests::{
    FeedbackListParams, FeedbackSettingsParams, SubmitFeedbackRequest,
    UpsertFeedbackSettingsRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeedbackService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// HTTP处理程序
pub async fn get_settings(
    req: HttpRequest,
    query: web::Query<FeedbackSettingsParams>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.get_settings(query.into_inner(), &req).await
}

pub async fn upsert_settings(
    req: HttpRequest,
    settings_data: web::Json<UpsertFeedbackSettingsRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .upsert_settings(settings_data.into_inner(), &req)
        .await
}

pub async fn submit_feedback(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    feedback_data: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .submit_feedback(course_id.0, feedback_data.into_inner(), &req)
        .await
}

pub async fn list_feedback(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<FeedbackListParams>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .list_feedback(course_id.0, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/settings")
                    .route(web::get().to(get_settings))
                    .route(
                        web::put()
                            .to(upsert_settings)
                            // 反馈窗口由管理员控制
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(submit_feedback)
                            // 只有学生提交反馈
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    )
                    .route(
                        web::get()
                            .to(list_feedback)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
