use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::AttendanceListParams, responses::AttendanceListResponse},
};
use crate::utils::validate::validate_date;

pub async fn list_attendance(
    service: &AttendanceService,
    course_id: i64,
    params: AttendanceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref date) = params.date
        && let Err(msg) = validate_date(date)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::DateInvalid, msg))
        );
    }

    match storage.list_attendance(course_id, &params).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { items },
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance: {e}"),
            )),
        ),
    }
}
