use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::UpdateEnrollmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 退课不删除记录，置为 dropped 保留历史
pub async fn drop_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Drop failed: {e}"),
                )),
            );
        }
    };

    // 学生只能退自己的课
    if current_user.role != UserRole::Admin && enrollment.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccessDenied,
            "Cannot drop another student's enrollment",
        )));
    }

    if enrollment.status == EnrollmentStatus::Dropped {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "Enrollment is already dropped",
        )));
    }

    let update = UpdateEnrollmentRequest {
        status: Some(EnrollmentStatus::Dropped),
        grade: None,
    };

    match storage.update_enrollment(enrollment_id, update).await {
        Ok(Some(_)) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("退课成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Drop failed: {e}"),
            )),
        ),
    }
}
