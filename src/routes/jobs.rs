use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::jobs::requests::{
    CreateJobPostingRequest, JobPostingListParams, UpdateJobPostingRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::JobPostingService;
use crate::utils::SafeIDI64;

// 懒加载的全局 JobPostingService 实例
static JOB_SERVICE: Lazy<JobPostingService> = Lazy::new(JobPostingService::new_lazy);

// HTTP处理程序
pub async fn list_job_postings(
    req: HttpRequest,
    query: web::Query<JobPostingListParams>,
) -> ActixResult<HttpResponse> {
    JOB_SERVICE.list_job_postings(query.into_inner(), &req).await
}

pub async fn create_job_posting(
    req: HttpRequest,
    job_data: web::Json<CreateJobPostingRequest>,
) -> ActixResult<HttpResponse> {
    JOB_SERVICE
        .create_job_posting(job_data.into_inner(), &req)
        .await
}

pub async fn get_job_posting(req: HttpRequest, job_id: SafeIDI64) -> ActixResult<HttpResponse> {
    JOB_SERVICE.get_job_posting(job_id.0, &req).await
}

pub async fn update_job_posting(
    req: HttpRequest,
    job_id: SafeIDI64,
    update_data: web::Json<UpdateJobPostingRequest>,
) -> ActixResult<HttpResponse> {
    JOB_SERVICE
        .update_job_posting(job_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_job_posting(req: HttpRequest, job_id: SafeIDI64) -> ActixResult<HttpResponse> {
    JOB_SERVICE.delete_job_posting(job_id.0, &req).await
}

// 配置路由（发布与维护仅限管理员，查询开放给所有已登录用户）
pub fn configure_job_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/jobs")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_job_postings))
                    .route(
                        web::post()
                            .to(create_job_posting)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_job_posting))
                    .route(
                        web::put()
                            .to(update_job_posting)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_job_posting)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
