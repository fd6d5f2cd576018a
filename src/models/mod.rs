pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod emails;
pub mod enrollments;
pub mod feedback;
pub mod fees;
pub mod jobs;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
