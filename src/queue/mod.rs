//! 后台邮件队列
//!
//! 进程内异步队列：HTTP 处理程序只负责入队，投递在后台任务中完成，
//! 请求路径不等待 SMTP。
//!
//! ## 投递语义
//!
//! - 并发由信号量控制，同时最多 `email_queue.workers` 个任务在投递
//! - 每个任务最多尝试 `email_queue.max_attempts` 次（含首次）
//! - 重试间隔指数退避：`retry_base_delay_secs * 2^(attempt-1)`
//! - 尝试耗尽后任务标记为失败并记录日志，不再重试
//! - 批量入队按 `batch_size` 分块，块之间让出调度，避免瞬时压满队列

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use crate::mailer::{EmailClient, templates};
use crate::models::emails::entities::EmailJob;

/// 邮件队列的入队端
///
/// 克隆开销很小，可以放进 actix 的 app_data 共享。
#[derive(Clone)]
pub struct EmailQueue {
    sender: mpsc::UnboundedSender<EmailJob>,
}

impl EmailQueue {
    /// 启动队列：spawn 后台分发任务，返回入队句柄
    pub fn start(client: EmailClient) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel::<EmailJob>();
        let config = &AppConfig::get().email_queue;

        tokio::spawn(dispatch_loop(
            receiver,
            Arc::new(client),
            config.workers,
            config.max_attempts,
            config.retry_base_delay_secs,
        ));

        info!(
            "Email queue started, workers: {}, max attempts: {}",
            config.workers, config.max_attempts
        );

        Self { sender }
    }

    /// 入队单个邮件任务
    pub fn enqueue(&self, job: EmailJob) -> Result<()> {
        self.sender
            .send(job)
            .map_err(|_| CampusError::queue_closed("email queue receiver dropped"))
    }

    /// 批量入队，按配置的 batch_size 分块
    ///
    /// 返回成功入队的任务数。任何一块入队失败说明队列已关闭，直接返回错误。
    pub async fn enqueue_bulk(&self, jobs: Vec<EmailJob>) -> Result<usize> {
        let batch_size = AppConfig::get().email_queue.batch_size.max(1);
        let mut enqueued = 0;

        for chunk in jobs.chunks(batch_size) {
            for job in chunk {
                self.enqueue(job.clone())?;
                enqueued += 1;
            }
            // 块之间让出一次调度，给 worker 消费的机会
            tokio::task::yield_now().await;
        }

        Ok(enqueued)
    }
}

/// 后台分发循环：从通道取任务，受信号量约束地并发投递
async fn dispatch_loop(
    mut receiver: mpsc::UnboundedReceiver<EmailJob>,
    client: Arc<EmailClient>,
    workers: usize,
    max_attempts: u32,
    retry_base_delay_secs: u64,
) {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));

    while let Some(job) = receiver.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                // 信号量只会在进程退出时关闭
                warn!("Email queue semaphore closed, stopping dispatch loop");
                break;
            }
        };

        let client = client.clone();
        tokio::spawn(async move {
            deliver_with_retry(&client, job, max_attempts, retry_base_delay_secs).await;
            drop(permit);
        });
    }

    info!("Email queue dispatch loop stopped");
}

/// 投递单个任务，失败时指数退避重试
async fn deliver_with_retry(
    client: &EmailClient,
    job: EmailJob,
    max_attempts: u32,
    retry_base_delay_secs: u64,
) {
    attempt_delivery(&job, max_attempts, retry_base_delay_secs, || {
        deliver_once(client, &job)
    })
    .await;
}

/// 重试循环本体，send 每调用一次计一次尝试
///
/// 成功返回 true。尝试耗尽后记录失败日志并返回 false，任务不再回到队列。
async fn attempt_delivery<F, Fut>(
    job: &EmailJob,
    max_attempts: u32,
    retry_base_delay_secs: u64,
    mut send: F,
) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        match send().await {
            Ok(()) => {
                info!(
                    "Email delivered: kind={:?}, to={}, fee_record_id={}, attempt={}",
                    job.kind, job.recipient.email, job.fee_record_id, attempt
                );
                return true;
            }
            Err(e) if attempt < max_attempts => {
                let delay = retry_delay(retry_base_delay_secs, attempt);
                warn!(
                    "Email delivery failed (attempt {}/{}), retrying in {}s: to={}, error={}",
                    attempt,
                    max_attempts,
                    delay.as_secs(),
                    job.recipient.email,
                    e
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                error!(
                    "Email permanently failed after {} attempts: kind={:?}, to={}, fee_record_id={}, error={}",
                    max_attempts, job.kind, job.recipient.email, job.fee_record_id, e
                );
            }
        }
    }

    false
}

/// 渲染模板并发送一次
async fn deliver_once(client: &EmailClient, job: &EmailJob) -> Result<()> {
    let body = templates::render(&job.kind, &job.variables)?;
    client
        .send_html(
            &job.recipient.email,
            &job.recipient.name,
            job.kind.subject(),
            body,
        )
        .await
}

/// 第 attempt 次失败后的等待时长：base * 2^(attempt-1)
fn retry_delay(base_secs: u64, attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_secs(base_secs.saturating_mul(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::emails::entities::{EmailJobKind, EmailRecipient};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn sample_job() -> EmailJob {
        EmailJob {
            kind: EmailJobKind::PaymentReminder,
            recipient: EmailRecipient {
                email: "student@example.edu".to_string(),
                name: "Student".to_string(),
            },
            fee_record_id: 1,
            variables: serde_json::json!({
                "student_name": "Student",
                "semester": "2026-spring",
                "overdue": false,
                "items": [],
            }),
        }
    }

    #[tokio::test]
    async fn test_failing_job_exhausts_attempts_and_stops() {
        let attempts = AtomicU32::new(0);

        let delivered = attempt_delivery(&sample_job(), 3, 0, || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(CampusError::email_transport("connection refused"))
        })
        .await;

        // 初次 + 两次重试，耗尽后任务丢弃，不再尝试
        assert!(!delivered);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_job_recovers_within_attempt_budget() {
        let attempts = AtomicU32::new(0);

        let delivered = attempt_delivery(&sample_job(), 3, 0, || async {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Err(CampusError::email_transport("timeout"))
            } else {
                Ok(())
            }
        })
        .await;

        assert!(delivered);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_max_attempts_clamps_to_one() {
        let attempts = AtomicU32::new(0);

        let delivered = attempt_delivery(&sample_job(), 0, 0, || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

        assert!(delivered);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retry_delay_doubles() {
        assert_eq!(retry_delay(2, 1), Duration::from_secs(2));
        assert_eq!(retry_delay(2, 2), Duration::from_secs(4));
        assert_eq!(retry_delay(2, 3), Duration::from_secs(8));
        assert_eq!(retry_delay(5, 2), Duration::from_secs(10));
    }

    #[test]
    fn test_retry_delay_saturates() {
        // 溢出时夹住而不是 panic
        let delay = retry_delay(u64::MAX, 10);
        assert_eq!(delay, Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_chunk_math() {
        let jobs: Vec<u32> = (0..125).collect();
        let chunks: Vec<_> = jobs.chunks(50).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 50);
        assert_eq!(chunks[2].len(), 25);
    }
}
