use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 后端异常，键可能存在但取不到值
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 值以 JSON 字符串存储，调用方自行序列化/反序列化。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
