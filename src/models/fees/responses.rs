use super::entities::FeeRecord;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 缴费记录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeRecordResponse {
    pub fee_record: FeeRecord,
}

// 缴费记录列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListResponse {
    pub items: Vec<FeeRecord>,
    pub pagination: PaginationInfo,
}

// 批量催缴响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct RemindFeesResponse {
    /// 已入队的提醒邮件数
    pub enqueued: usize,
}
