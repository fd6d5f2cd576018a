use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
    Excused, // 请假
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, late, excused"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Excused => write!(f, "excused"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    /// 考勤日期（YYYY-MM-DD）
    pub date: String,
    pub status: AttendanceStatus,
    pub marked_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
