//! SMTP 邮件客户端
//!
//! 基于 lettre 的异步 SMTP 发送，连接参数全部来自配置。
//! 队列 worker 持有一个客户端实例，内部连接池复用 SMTP 会话。

pub mod templates;

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::SmtpConfig;
use crate::errors::{CampusError, Result};

pub struct EmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailClient {
    /// 根据配置创建 SMTP 客户端
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            // 仅用于本地调试 relay（如 mailpit），生产环境必须开 TLS
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        let transport = builder.pool_config(PoolConfig::default()).build();

        let address = config
            .from_address
            .parse::<Address>()
            .map_err(|e| CampusError::validation(format!("发件地址无效: {e}")))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        debug!(
            "EmailClient initialized, relay: {}:{}, tls: {}",
            config.host, config.port, config.use_tls
        );

        Ok(Self { transport, from })
    }

    /// 发送一封 HTML 邮件
    pub async fn send_html(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        html_body: String,
    ) -> Result<()> {
        let address = to_email
            .parse::<Address>()
            .map_err(|e| CampusError::validation(format!("收件地址无效 '{to_email}': {e}")))?;
        let to = Mailbox::new(Some(to_name.to_string()), address);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| CampusError::email_transport(format!("构造邮件失败: {e}")))?;

        self.transport.send(message).await?;

        debug!("Email sent to {}", to_email);
        Ok(())
    }
}
