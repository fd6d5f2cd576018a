use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::requests::RegisterRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

// 自助注册只开放学生身份，教师和管理员账号由管理员创建
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 验证用户名合法性
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordTooWeak, msg)));
    }

    // 检查用户名是否已存在
    if let Err(response) = check_username_exists(&storage, &register_request.username).await {
        return Ok(response);
    }

    // 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &register_request.email).await {
        return Ok(response);
    }

    // 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    "注册失败",
                )),
            );
        }
    };

    let create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: UserRole::Student,
        college_id: register_request.college_id,
        department: register_request.department,
        display_name: register_request.display_name,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("New student registered: {}", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "注册成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("注册失败: {e}"),
            )),
        ),
    }
}

async fn check_username_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    username: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "Username already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Register failed: {e}"),
            )),
        ),
    }
}
