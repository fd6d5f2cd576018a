use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::{info, warn};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::emails::entities::{EmailJob, EmailJobKind, EmailRecipient};
use crate::models::fees::entities::FeeStatus;
use crate::models::users::entities::{User, UserRole};
use crate::models::{
    ApiResponse, ErrorCode,
    fees::{requests::PayFeeRequest, responses::FeeRecordResponse},
};

pub async fn pay_fee(
    service: &FeeService,
    record_id: i64,
    pay_request: PayFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let record = match storage.get_fee_record_by_id(record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeRecordNotFound,
                "Fee record not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Payment failed: {e}"),
                )),
            );
        }
    };

    // 学生只能缴自己的费用
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && user.role == UserRole::Student
        && record.student_id != user.id
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccessDenied,
            "Cannot pay another student's fee",
        )));
    }

    if record.status == FeeStatus::Paid {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::FeeAlreadyPaid,
            "Fee is already paid",
        )));
    }

    if record.status == FeeStatus::Waived {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "Fee has been waived, no payment required",
        )));
    }

    if pay_request.payment_method.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Payment method cannot be empty",
        )));
    }

    // 无外部交易号时生成收据号
    let transaction_id = pay_request
        .transaction_id
        .unwrap_or_else(|| format!("RCPT-{}", uuid::Uuid::new_v4()));

    let fee_record = match storage
        .mark_fee_paid(record_id, &pay_request.payment_method, &transaction_id)
        .await
    {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeRecordNotFound,
                "Fee record not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Payment failed: {e}"),
                )),
            );
        }
    };

    info!(
        "Fee record {} paid via {} ({})",
        fee_record.id, pay_request.payment_method, transaction_id
    );

    // 邮件投递是尽力而为：入队失败只记日志，不影响缴费结果
    match storage.get_user_by_id(fee_record.student_id).await {
        Ok(Some(student)) => {
            let job = build_confirmation_job(&fee_record, &student);
            if let Err(e) = service.get_email_queue(request).enqueue(job) {
                warn!("Failed to enqueue payment confirmation email: {}", e);
            }
        }
        Ok(None) => {
            warn!(
                "Student {} not found, skipping confirmation email",
                fee_record.student_id
            );
        }
        Err(e) => {
            warn!("Failed to load student for confirmation email: {}", e);
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        FeeRecordResponse { fee_record },
        "缴费成功",
    )))
}

fn build_confirmation_job(
    record: &crate::models::fees::entities::FeeRecord,
    student: &User,
) -> EmailJob {
    let paid_at = record
        .paid_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();

    EmailJob {
        kind: EmailJobKind::PaymentConfirmation,
        recipient: EmailRecipient {
            email: student.email.clone(),
            name: student.mail_display_name().to_string(),
        },
        fee_record_id: record.id,
        variables: json!({
            "student_name": student.mail_display_name(),
            "semester": record.semester,
            "fee_type": record.fee_type.to_string(),
            "amount": record.amount_display(),
            "payment_method": record.payment_method,
            "transaction_id": record.transaction_id,
            "paid_at": paid_at,
        }),
    }
}
