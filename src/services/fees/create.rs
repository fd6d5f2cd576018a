use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::{requests::CreateFeeRecordRequest, responses::FeeRecordResponse},
};

pub async fn create_fee_record(
    service: &FeeService,
    record_data: CreateFeeRecordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if record_data.amount <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AmountInvalid,
            "Fee amount must be positive",
        )));
    }

    // 学生必须存在
    match storage.get_user_by_id(record_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fee record creation failed: {e}"),
                )),
            );
        }
    }

    // 每个学生每学期每类费用只有一条记录
    match storage
        .get_fee_record(
            record_data.student_id,
            &record_data.semester,
            &record_data.fee_type,
        )
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateFeeRecord,
                "Fee record already exists for this student, semester and type",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fee record creation failed: {e}"),
                )),
            );
        }
    }

    match storage.create_fee_record(record_data).await {
        Ok(fee_record) => Ok(HttpResponse::Created().json(ApiResponse::success(
            FeeRecordResponse { fee_record },
            "缴费记录创建成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fee record creation failed: {e}"),
            )),
        ),
    }
}
