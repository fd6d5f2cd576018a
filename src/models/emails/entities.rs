use serde::{Deserialize, Serialize};

// 邮件任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailJobKind {
    PaymentConfirmation, // 缴费确认
    PaymentReminder,     // 缴费提醒
}

impl EmailJobKind {
    /// 对应的模板名
    pub fn template_name(&self) -> &'static str {
        match self {
            EmailJobKind::PaymentConfirmation => "payment_confirmation",
            EmailJobKind::PaymentReminder => "payment_reminder",
        }
    }

    /// 邮件主题
    pub fn subject(&self) -> &'static str {
        match self {
            EmailJobKind::PaymentConfirmation => "Payment confirmation",
            EmailJobKind::PaymentReminder => "Fee payment reminder",
        }
    }
}

// 收件人
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecipient {
    pub email: String,
    pub name: String,
}

// 邮件任务载荷
//
// { 类型, 收件人, 关联缴费记录ID, 模板变量 }
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJob {
    pub kind: EmailJobKind,
    pub recipient: EmailRecipient,
    pub fee_record_id: i64,
    pub variables: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_kind_template_names() {
        assert_eq!(
            EmailJobKind::PaymentConfirmation.template_name(),
            "payment_confirmation"
        );
        assert_eq!(
            EmailJobKind::PaymentReminder.template_name(),
            "payment_reminder"
        );
    }

    #[test]
    fn test_job_payload_round_trip() {
        let job = EmailJob {
            kind: EmailJobKind::PaymentReminder,
            recipient: EmailRecipient {
                email: "student@example.edu".to_string(),
                name: "Student".to_string(),
            },
            fee_record_id: 42,
            variables: serde_json::json!({ "amount": "1200.00" }),
        };
        let json = serde_json::to_string(&job).unwrap();
        let parsed: EmailJob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, EmailJobKind::PaymentReminder);
        assert_eq!(parsed.fee_record_id, 42);
        assert_eq!(parsed.recipient.email, "student@example.edu");
    }
}
