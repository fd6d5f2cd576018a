use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                // 课程查询开放给所有已登录用户
                web::resource("").route(web::get().to(list_courses)).route(
                    web::post()
                        .to(create_course)
                        // 课程目录由管理员维护
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::put()
                            .to(update_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
