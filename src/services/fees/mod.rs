pub mod create;
pub mod get;
pub mod list;
pub mod pay;
pub mod remind;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{
    CreateFeeRecordRequest, FeeListParams, PayFeeRequest, RemindFeesRequest,
};
use crate::queue::EmailQueue;
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_email_queue(&self, request: &HttpRequest) -> EmailQueue {
        request
            .app_data::<actix_web::web::Data<EmailQueue>>()
            .expect("Email queue not found in app data")
            .get_ref()
            .clone()
    }

    // 创建缴费记录（管理员）
    pub async fn create_fee_record(
        &self,
        record_data: CreateFeeRecordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee_record(self, record_data, request).await
    }

    // 缴费记录列表
    pub async fn list_fee_records(
        &self,
        params: FeeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_fee_records(self, params, request).await
    }

    // 缴费记录详情
    pub async fn get_fee_record(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_fee_record(self, record_id, request).await
    }

    // 缴费并发送确认邮件
    pub async fn pay_fee(
        &self,
        record_id: i64,
        pay_request: PayFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pay::pay_fee(self, record_id, pay_request, request).await
    }

    // 批量催缴（管理员）
    pub async fn remind_fees(
        &self,
        remind_request: RemindFeesRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        remind::remind_fees(self, remind_request, request).await
    }
}
