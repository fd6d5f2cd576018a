use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{
    ApiResponse, ErrorCode,
    feedback::{requests::SubmitFeedbackRequest, responses::FeedbackEntryResponse},
};
use crate::utils::validate::validate_rating;

pub async fn submit_feedback(
    service: &FeedbackService,
    course_id: i64,
    feedback_data: SubmitFeedbackRequest,
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

    if let Err(msg) = validate_rating(feedback_data.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingInvalid, msg)));
    }

    // 课程必须存在，反馈窗口挂在课程所属学院下
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
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
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    };

    // 反馈窗口必须开放
    let settings = match storage
        .get_feedback_settings(course.college_id, &feedback_data.semester)
        .await
    {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::FeedbackClosed,
                "Feedback window is not configured for this semester",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    };

    if !settings.accepts_submissions(chrono::Utc::now()) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::FeedbackClosed,
            "Feedback window is closed",
        )));
    }

    if feedback_data.anonymous && !settings.allow_anonymous {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Anonymous feedback is not allowed for this semester",
        )));
    }

    // 必须选了这门课且未退课
    match storage
        .get_enrollment(current_user.id, course_id, &feedback_data.semester)
        .await
    {
        Ok(Some(enrollment)) if enrollment.status != EnrollmentStatus::Dropped => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                "Only enrolled students can submit feedback",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    }

    // 每学期每门课只能提交一次
    match storage
        .get_feedback_entry(course_id, current_user.id, &feedback_data.semester)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateFeedback,
                "Feedback already submitted for this course and semester",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    }

    match storage
        .create_feedback_entry(course_id, current_user.id, feedback_data)
        .await
    {
        Ok(entry) => {
            info!("Feedback submitted for course {}", course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FeedbackEntryResponse { entry },
                "反馈提交成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Feedback submission failed: {e}"),
            )),
        ),
    }
}
