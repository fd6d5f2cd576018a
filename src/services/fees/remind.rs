use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::info;

use super::FeeService;
use crate::models::emails::entities::{EmailJob, EmailJobKind, EmailRecipient};
use crate::models::fees::entities::FeeRecord;
use crate::models::users::entities::User;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::{requests::RemindFeesRequest, responses::RemindFeesResponse},
};

// 管理员批量催缴：学期内每条待缴/逾期记录各生成一封提醒邮件
pub async fn remind_fees(
    service: &FeeService,
    remind_request: RemindFeesRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if remind_request.semester.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Semester cannot be empty",
        )));
    }

    let payable = match storage
        .list_payable_fee_records(&remind_request.semester, remind_request.fee_type.as_ref())
        .await
    {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to collect payable fee records: {e}"),
                )),
            );
        }
    };

    let jobs: Vec<EmailJob> = payable
        .iter()
        .map(|(record, student)| build_reminder_job(record, student))
        .collect();

    let total = jobs.len();
    match service.get_email_queue(request).enqueue_bulk(jobs).await {
        Ok(enqueued) => {
            info!(
                "Fee reminders enqueued for semester {}: {}/{}",
                remind_request.semester, enqueued, total
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RemindFeesResponse { enqueued },
                "催缴邮件已入队",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to enqueue reminders: {e}"),
            )),
        ),
    }
}

fn build_reminder_job(record: &FeeRecord, student: &User) -> EmailJob {
    EmailJob {
        kind: EmailJobKind::PaymentReminder,
        recipient: EmailRecipient {
            email: student.email.clone(),
            name: student.mail_display_name().to_string(),
        },
        fee_record_id: record.id,
        variables: json!({
            "student_name": student.mail_display_name(),
            "semester": record.semester,
            "overdue": record.is_overdue(chrono::Utc::now()),
            "items": [{
                "fee_type": record.fee_type.to_string(),
                "amount": record.amount_display(),
                "due_date": record.due_date.format("%Y-%m-%d").to_string(),
            }],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fees::entities::{FeeStatus, FeeType};
    use crate::models::users::entities::{UserRole, UserStatus};

    fn student() -> User {
        User {
            id: 7,
            username: "zhangsan".to_string(),
            email: "zhangsan@example.edu".to_string(),
            password_hash: String::new(),
            role: UserRole::Student,
            status: UserStatus::Active,
            college_id: Some(1),
            department: None,
            display_name: Some("张三".to_string()),
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn record(status: FeeStatus) -> FeeRecord {
        FeeRecord {
            id: 3,
            student_id: 7,
            semester: "2026-spring".to_string(),
            fee_type: FeeType::Tuition,
            amount: 500000,
            status,
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
            paid_at: None,
            payment_method: None,
            transaction_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_reminder_job_payload() {
        let job = build_reminder_job(&record(FeeStatus::Overdue), &student());
        assert_eq!(job.kind, EmailJobKind::PaymentReminder);
        assert_eq!(job.fee_record_id, 3);
        assert_eq!(job.recipient.email, "zhangsan@example.edu");
        assert_eq!(job.variables["overdue"], json!(true));
        assert_eq!(job.variables["items"][0]["amount"], json!("5000.00"));
    }

    #[test]
    fn test_reminder_not_overdue_for_pending() {
        let job = build_reminder_job(&record(FeeStatus::Pending), &student());
        assert_eq!(job.variables["overdue"], json!(false));
    }

    #[test]
    fn test_reminder_overdue_for_pending_past_due() {
        let mut past_due = record(FeeStatus::Pending);
        past_due.due_date = chrono::Utc::now() - chrono::Duration::days(3);

        let job = build_reminder_job(&past_due, &student());
        assert_eq!(job.variables["overdue"], json!(true));
    }
}
