use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::mailer::EmailClient;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::queue::EmailQueue;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub email_queue: EmailQueue,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);

                // 如果配置的缓存失败，尝试回退策略
                if cache_type == "redis" {
                    warn!("Falling back to memory cache");
                    if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                        match fallback_constructor().await {
                            Ok(cache) => {
                                warn!(
                                    "Successfully created fallback Moka (in-memory) cache backend"
                                );
                                return Ok(Arc::from(cache));
                            }
                            Err(fallback_e) => {
                                warn!("Failed to create fallback Moka cache: {}", fallback_e);
                            }
                        }
                    }
                }
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);

        // 如果找不到配置的缓存类型，尝试默认的内存缓存
        if cache_type != "moka" {
            warn!("Falling back to default memory cache");
            if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                match fallback_constructor().await {
                    Ok(cache) => {
                        warn!("Successfully created fallback Moka (in-memory) cache backend");
                        return Ok(Arc::from(cache));
                    }
                    Err(fallback_e) => {
                        warn!("Failed to create fallback Moka cache: {}", fallback_e);
                    }
                }
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 如果数据库中还没有 admin 账号，则创建一个
async fn seed_admin(storage: &Arc<dyn Storage>) {
    // 检查是否已有管理员
    match storage.get_user_by_username("admin").await {
        Ok(Some(user)) => {
            debug!(
                "Admin account already exists (ID: {}), skipping admin seed",
                user.id
            );
            return;
        }
        Ok(None) => {
            info!("No admin account found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to look up admin account: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    // 哈希密码
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    // 创建管理员账号（平台管理员不属于任何学院）
    let admin_request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password: password_hash,
        role: UserRole::Admin,
        college_id: None,
        department: None,
        display_name: Some("Administrator".to_string()),
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 创建邮件投递队列
/// SMTP 连接是懒建立的，这里只校验配置并启动调度循环
fn create_email_queue() -> EmailQueue {
    let config = AppConfig::get();
    let client = EmailClient::from_config(&config.smtp).expect("Failed to create SMTP transport");
    let queue = EmailQueue::start(client);
    warn!(
        "Email queue started ({} workers, {} attempts per job)",
        config.email_queue.workers, config.email_queue.max_attempts
    );
    queue
}

/// 准备服务器启动的上下文
/// 包括存储、缓存、邮件队列和路由配置等
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    // 启动邮件队列
    let email_queue = create_email_queue();

    StartupContext {
        storage,
        cache,
        email_queue,
    }
}
