use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{
    EnrollRequest, EnrollmentListParams, UpdateEnrollmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn enroll(
    req: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(enroll_data.into_inner(), &req).await
}

pub async fn list_my_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_my_enrollments(query.into_inner(), &req)
        .await
}

pub async fn list_course_enrollments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_course_enrollments(course_id.0, query.into_inner(), &req)
        .await
}

pub async fn drop_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.drop_enrollment(enrollment_id.0, &req).await
}

pub async fn update_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
    update_data: web::Json<UpdateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment(enrollment_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            // 学生自助选课，管理员可代选（服务层区分）
            .route("", web::post().to(enroll))
            // 学生查询自己的选课
            .route("", web::get().to(list_my_enrollments))
            .route("/{id}", web::delete().to(drop_enrollment))
            .service(
                // 成绩与状态由教师或管理员维护
                web::resource("/{id}").route(
                    web::patch()
                        .to(update_enrollment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_course_enrollments)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
