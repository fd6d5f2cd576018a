use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// HTTP处理程序
pub async fn create_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(course_id.0, assignment_data.into_inner(), &req)
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(course_id.0, query.into_inner(), &req)
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(assignment_id.0, &req).await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    update_data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(assignment_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(assignment_id.0, &req).await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(
                        web::post()
                            .to(create_assignment)
                            // 任课教师或管理员发布作业（服务层校验归属）
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(
                        web::put()
                            .to(update_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
