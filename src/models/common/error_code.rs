//! 业务错误码
//!
//! 与 HTTP 状态码独立，前端根据 code 字段做细粒度处理。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,
    ValidationFailed = 40001,

    // 401xx 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 权限错误
    AccessDenied = 40300,
    FeedbackClosed = 40310,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    EnrollmentNotFound = 40403,
    AssignmentNotFound = 40404,
    FeeRecordNotFound = 40405,
    AnnouncementNotFound = 40406,
    JobPostingNotFound = 40407,
    FeedbackSettingsNotFound = 40408,

    // 409xx 冲突
    Conflict = 40900,
    UserAlreadyExists = 40901,
    CourseAlreadyExists = 40902,
    AlreadyEnrolled = 40903,
    DuplicateFeeRecord = 40904,
    DuplicateFeedback = 40905,
    FeeAlreadyPaid = 40906,

    // 422xx 字段校验
    UserNameInvalid = 42201,
    UserEmailInvalid = 42202,
    PasswordTooWeak = 42203,
    RatingInvalid = 42204,
    AmountInvalid = 42205,
    DateInvalid = 42206,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务器错误
    InternalServerError = 50000,
    UserCreationFailed = 50001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::DuplicateFeeRecord as i32, 40904);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
