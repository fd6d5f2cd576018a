use super::entities::AttendanceRecord;
use serde::Serialize;
use ts_rs::TS;

// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceRecord>,
}

// 批量标记响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceResponse {
    pub marked: usize,
}

// 学生考勤汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub course_id: i64,
    pub student_id: i64,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    /// 出勤率（present + late，百分比）
    pub attendance_rate: f64,
}
