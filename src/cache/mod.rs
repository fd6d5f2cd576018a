//! 对象缓存抽象
//!
//! 缓存后端通过 `declare_object_cache_plugin!` 在启动前自注册，
//! 运行时根据配置的 cache_type 取对应构造器。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 后端类型需要实现 `ObjectCache` 并提供 `new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ident) => {
        ::paste::paste! {
            #[ctor::ctor]
            #[allow(non_snake_case)]
            fn [<__register_object_cache_ $ty>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        Box::pin(async {
                            <$ty>::new()
                                .map(|cache| {
                                    Box::new(cache) as Box<dyn $crate::cache::ObjectCache>
                                })
                                .map_err(|e| {
                                    $crate::errors::CampusError::cache_connection(e)
                                })
                        })
                    }),
                );
            }
        }
    };
}
