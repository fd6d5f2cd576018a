use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::{ApiResponse, ErrorCode, feedback::requests::FeedbackListParams};

// 匿名条目的 student_id 在存储层转换时已经抹掉
pub async fn list_feedback(
    service: &FeedbackService,
    course_id: i64,
    params: FeedbackListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_feedback_entries(course_id, params.semester.as_deref())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Feedback list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve feedback: {e}"),
            )),
        ),
    }
}
