//! 路径参数安全提取器
//!
//! 直接用 `web::Path<i64>` 时，非法参数会返回 actix 默认的 400 纯文本。
//! 这里的提取器把解析失败统一包装成 ApiResponse 格式的错误响应。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::InternalError, web};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn invalid_id_error(name: &str, raw: &str) -> actix_web::Error {
    let response = actix_web::HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter '{name}': '{raw}'"),
    ));
    InternalError::from_response(format!("invalid path parameter: {name}"), response).into()
}

fn extract_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid_id_error(name, raw))
}

/// 通用 `{id}` 路径参数
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_i64(req, "id").map(SafeIDI64))
    }
}

impl std::ops::Deref for SafeIDI64 {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// 嵌套路由中的 `{course_id}` 路径参数
pub struct SafeCourseIdI64(pub i64);

impl FromRequest for SafeCourseIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_i64(req, "course_id").map(SafeCourseIdI64))
    }
}

impl std::ops::Deref for SafeCourseIdI64 {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// web::Path<i64> 的兼容转换，个别路由仍然用元组路径
impl From<web::Path<i64>> for SafeIDI64 {
    fn from(path: web::Path<i64>) -> Self {
        SafeIDI64(path.into_inner())
    }
}
