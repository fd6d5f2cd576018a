use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{
    CreateFeeRecordRequest, FeeListParams, PayFeeRequest, RemindFeesRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

// HTTP处理程序
pub async fn create_fee_record(
    req: HttpRequest,
    record_data: web::Json<CreateFeeRecordRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .create_fee_record(record_data.into_inner(), &req)
        .await
}

pub async fn list_fee_records(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fee_records(query.into_inner(), &req).await
}

pub async fn get_fee_record(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee_record(record_id.0, &req).await
}

pub async fn pay_fee(
    req: HttpRequest,
    record_id: SafeIDI64,
    pay_data: web::Json<PayFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .pay_fee(record_id.0, pay_data.into_inner(), &req)
        .await
}

pub async fn remind_fees(
    req: HttpRequest,
    remind_data: web::Json<RemindFeesRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.remind_fees(remind_data.into_inner(), &req).await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                // 批量催缴会触发大量邮件任务，单独限流
                web::resource("/remind").route(
                    web::post()
                        .to(remind_fees)
                        .wrap(middlewares::RateLimit::fee_reminder())
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("")
                    // 学生看自己的记录，管理员看全部（服务层过滤）
                    .route(web::get().to(list_fee_records))
                    .route(
                        web::post()
                            .to(create_fee_record)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .route("/{id}", web::get().to(get_fee_record))
            .route("/{id}/pay", web::post().to(pay_fee)),
    );
}
