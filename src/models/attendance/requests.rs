use super::entities::AttendanceStatus;
use serde::Deserialize;
use ts_rs::TS;

// 单个学生的考勤标记
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// 批量考勤标记请求（某课程某天）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    /// 考勤日期（YYYY-MM-DD）
    pub date: String,
    pub entries: Vec<AttendanceEntry>,
}

// 考勤查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    /// 限定某一天；不传则返回全部
    pub date: Option<String>,
    pub student_id: Option<i64>,
}
