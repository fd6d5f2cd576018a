//! HTML 邮件模板
//!
//! 模板用 handlebars 渲染，支持变量替换、条件块和循环块。
//! 模板内容编译进二进制，启动时注册一次，渲染时只读。

use handlebars::Handlebars;
use once_cell::sync::Lazy;

use crate::errors::{CampusError, Result};
use crate::models::emails::entities::EmailJobKind;

/// 缴费成功确认邮件
const PAYMENT_CONFIRMATION: &str = r#"<!DOCTYPE html>
<html>
<body style="font-family: sans-serif; color: #333;">
  <h2>缴费确认</h2>
  <p>{{student_name}} 同学，你好：</p>
  <p>我们已收到你 {{semester}} 学期的 <strong>{{fee_type}}</strong> 缴费，金额 <strong>￥{{amount}}</strong>。</p>
  <table style="border-collapse: collapse;">
    <tr><td style="padding: 4px 12px;">缴费方式</td><td style="padding: 4px 12px;">{{payment_method}}</td></tr>
    {{#if transaction_id}}
    <tr><td style="padding: 4px 12px;">交易单号</td><td style="padding: 4px 12px;">{{transaction_id}}</td></tr>
    {{/if}}
    <tr><td style="padding: 4px 12px;">缴费时间</td><td style="padding: 4px 12px;">{{paid_at}}</td></tr>
  </table>
  <p>此邮件为系统自动发送，请勿回复。</p>
</body>
</html>"#;

/// 缴费催缴提醒邮件
const PAYMENT_REMINDER: &str = r#"<!DOCTYPE html>
<html>
<body style="font-family: sans-serif; color: #333;">
  <h2>缴费提醒</h2>
  <p>{{student_name}} 同学，你好：</p>
  {{#if overdue}}
  <p style="color: #c00;">你有已逾期的费用尚未缴纳，请尽快处理：</p>
  {{else}}
  <p>你有以下费用即将到期，请及时缴纳：</p>
  {{/if}}
  <table style="border-collapse: collapse; border: 1px solid #ccc;">
    <tr>
      <th style="padding: 4px 12px; border: 1px solid #ccc;">费用类型</th>
      <th style="padding: 4px 12px; border: 1px solid #ccc;">金额</th>
      <th style="padding: 4px 12px; border: 1px solid #ccc;">截止日期</th>
    </tr>
    {{#each items}}
    <tr>
      <td style="padding: 4px 12px; border: 1px solid #ccc;">{{this.fee_type}}</td>
      <td style="padding: 4px 12px; border: 1px solid #ccc;">￥{{this.amount}}</td>
      <td style="padding: 4px 12px; border: 1px solid #ccc;">{{this.due_date}}</td>
    </tr>
    {{/each}}
  </table>
  <p>{{semester}} 学期 · 此邮件为系统自动发送，请勿回复。</p>
</body>
</html>"#;

/// 全局模板注册表，启动时初始化一次
static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut registry = Handlebars::new();
    // 模板是内置常量，注册失败属于编码错误，直接 panic 暴露
    registry
        .register_template_string("payment_confirmation", PAYMENT_CONFIRMATION)
        .expect("payment_confirmation template is invalid");
    registry
        .register_template_string("payment_reminder", PAYMENT_REMINDER)
        .expect("payment_reminder template is invalid");
    registry
});

/// 渲染指定类型的邮件正文
pub fn render(kind: &EmailJobKind, variables: &serde_json::Value) -> Result<String> {
    let name = kind.template_name();
    if !TEMPLATES.has_template(name) {
        return Err(CampusError::template_render(format!(
            "Unknown email template: {name}"
        )));
    }
    Ok(TEMPLATES.render(name, variables)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_payment_confirmation() {
        let body = render(
            &EmailJobKind::PaymentConfirmation,
            &json!({
                "student_name": "张三",
                "semester": "2026-Spring",
                "fee_type": "学费",
                "amount": "5000.00",
                "payment_method": "alipay",
                "transaction_id": "TXN-20260827-0001",
                "paid_at": "2026-08-27 10:00:00",
            }),
        )
        .unwrap();

        assert!(body.contains("张三"));
        assert!(body.contains("TXN-20260827-0001"));
        assert!(body.contains("￥5000.00"));
    }

    #[test]
    fn test_confirmation_without_transaction_id() {
        let body = render(
            &EmailJobKind::PaymentConfirmation,
            &json!({
                "student_name": "李四",
                "semester": "2026-Spring",
                "fee_type": "住宿费",
                "amount": "1200.00",
                "payment_method": "cash",
                "paid_at": "2026-08-27 10:00:00",
            }),
        )
        .unwrap();

        // 无交易单号时条件块整行不渲染
        assert!(!body.contains("交易单号"));
    }

    #[test]
    fn test_render_payment_reminder_loop() {
        let body = render(
            &EmailJobKind::PaymentReminder,
            &json!({
                "student_name": "王五",
                "semester": "2026-Spring",
                "overdue": true,
                "items": [
                    {"fee_type": "学费", "amount": "5000.00", "due_date": "2026-03-01"},
                    {"fee_type": "实验费", "amount": "300.00", "due_date": "2026-03-15"},
                ],
            }),
        )
        .unwrap();

        assert!(body.contains("已逾期"));
        assert!(body.contains("学费"));
        assert!(body.contains("实验费"));
        assert!(body.contains("2026-03-15"));
    }
}
