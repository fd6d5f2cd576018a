use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{AttendanceListParams, MarkAttendanceRequest};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn mark_attendance(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(course_id.0, mark_data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(course_id.0, query.into_inner(), &req)
        .await
}

pub async fn attendance_summary(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .attendance_summary(course_id.0, student_id.0, &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(mark_attendance)
                            // 任课教师或管理员标记考勤（服务层校验归属）
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 学生查自己的汇总，教师/管理员可查任何学生（服务层校验）
            .route("/{id}/summary", web::get().to(attendance_summary)),
    );
}
