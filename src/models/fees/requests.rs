use super::entities::{FeeStatus, FeeType};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 缴费记录创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct CreateFeeRecordRequest {
    pub student_id: i64,
    pub semester: String,
    pub fee_type: FeeType,
    /// 金额（最小货币单位）
    pub amount: i64,
    /// 截止时间（unix 秒）
    pub due_date: i64,
}

// 缴费请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct PayFeeRequest {
    pub payment_method: String,
    /// 外部交易号；缺省时生成收据号
    pub transaction_id: Option<String>,
}

// 批量催缴请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct RemindFeesRequest {
    pub semester: String,
    /// 限定费用类型；不传则催缴全部类型
    pub fee_type: Option<FeeType>,
}

// 缴费记录查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub semester: Option<String>,
    pub fee_type: Option<FeeType>,
    pub status: Option<FeeStatus>,
}

// 缴费记录查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub semester: Option<String>,
    pub fee_type: Option<FeeType>,
    pub status: Option<FeeStatus>,
}
