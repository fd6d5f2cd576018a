//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_campus_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CampusError {
            $($variant(String),)*
        }

        impl CampusError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CampusError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CampusError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CampusError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CampusError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CampusError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_campus_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    EmailTransport("E012", "Email Transport Error"),
    TemplateRender("E013", "Template Render Error"),
    QueueClosed("E014", "Email Queue Closed"),
}

impl CampusError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CampusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CampusError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CampusError {
    fn from(err: sea_orm::DbErr) -> Self {
        CampusError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        CampusError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CampusError {
    fn from(err: chrono::ParseError) -> Self {
        CampusError::DateParse(err.to_string())
    }
}

impl From<handlebars::RenderError> for CampusError {
    fn from(err: handlebars::RenderError) -> Self {
        CampusError::TemplateRender(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for CampusError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        CampusError::EmailTransport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CampusError::cache_connection("test").code(), "E001");
        assert_eq!(CampusError::database_config("test").code(), "E003");
        assert_eq!(CampusError::validation("test").code(), "E006");
        assert_eq!(CampusError::email_transport("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CampusError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            CampusError::template_render("test").error_type(),
            "Template Render Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CampusError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CampusError::queue_closed("worker pool stopped");
        let formatted = err.format_simple();
        assert!(formatted.contains("Email Queue Closed"));
        assert!(formatted.contains("worker pool stopped"));
    }
}
