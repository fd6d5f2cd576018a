//! 请求参数错误处理器
//!
//! JSON 反序列化和查询参数解析失败时，返回统一的 ApiResponse 错误格式，
//! 而不是 actix 默认的纯文本 400。

use actix_web::{HttpRequest, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid JSON payload: {err}");
    let response = actix_web::HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        message,
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    let response = actix_web::HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        message,
    ));
    InternalError::from_response(err, response).into()
}
