use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{requests::EnrollRequest, responses::EnrollmentResponse},
};

pub async fn enroll(
    service: &EnrollmentService,
    enroll_request: EnrollRequest,
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

    // 学生只能给自己选课，管理员可以代任何学生选课
    let student_id = match current_user.role {
        UserRole::Student => current_user.id,
        UserRole::Admin => match enroll_request.student_id {
            Some(id) => id,
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "student_id is required when enrolling on behalf of a student",
                )));
            }
        },
        UserRole::Teacher => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                "Teachers cannot enroll students",
            )));
        }
    };

    // 课程必须存在
    match storage.get_course_by_id(enroll_request.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment failed: {e}"),
                )),
            );
        }
    }

    // 同一学期同一课程只能选一次
    match storage
        .get_enrollment(student_id, enroll_request.course_id, &enroll_request.semester)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Already enrolled in this course for the semester",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment failed: {e}"),
                )),
            );
        }
    }

    match storage
        .create_enrollment(student_id, enroll_request.course_id, &enroll_request.semester)
        .await
    {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {} ({})",
                student_id, enrollment.course_id, enrollment.semester
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EnrollmentResponse { enrollment },
                "选课成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Enrollment failed: {e}"),
            )),
        ),
    }
}
