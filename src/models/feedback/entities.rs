use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 反馈窗口设置（每学院每学期一份）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackSettings {
    pub id: i64,
    pub college_id: i64,
    pub semester: String,
    pub is_open: bool,
    pub allow_anonymous: bool,
    pub opens_at: Option<chrono::DateTime<chrono::Utc>>,
    pub closes_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FeedbackSettings {
    /// 反馈窗口当前是否接受提交
    pub fn accepts_submissions(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        if !self.is_open {
            return false;
        }
        if let Some(opens_at) = self.opens_at
            && now < opens_at
        {
            return false;
        }
        if let Some(closes_at) = self.closes_at
            && now > closes_at
        {
            return false;
        }
        true
    }
}

// 课程反馈条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct FeedbackEntry {
    pub id: i64,
    pub course_id: i64,
    /// 匿名反馈对教师隐藏学生ID
    pub student_id: Option<i64>,
    pub semester: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub anonymous: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn settings(is_open: bool) -> FeedbackSettings {
        FeedbackSettings {
            id: 1,
            college_id: 1,
            semester: "2026-spring".to_string(),
            is_open,
            allow_anonymous: true,
            opens_at: None,
            closes_at: None,
            updated_by: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_closed_window_rejects() {
        assert!(!settings(false).accepts_submissions(Utc::now()));
    }

    #[test]
    fn test_open_window_without_bounds_accepts() {
        assert!(settings(true).accepts_submissions(Utc::now()));
    }

    #[test]
    fn test_window_bounds() {
        let now = Utc::now();
        let mut s = settings(true);
        s.opens_at = Some(now + Duration::hours(1));
        assert!(!s.accepts_submissions(now));

        s.opens_at = Some(now - Duration::hours(2));
        s.closes_at = Some(now - Duration::hours(1));
        assert!(!s.accepts_submissions(now));

        s.closes_at = Some(now + Duration::hours(1));
        assert!(s.accepts_submissions(now));
    }
}
