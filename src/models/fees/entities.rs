use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 费用类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub enum FeeType {
    Tuition, // 学费
    Hostel,  // 住宿费
    Library, // 图书馆费
    Exam,    // 考试费
    Other,   // 其他
}

impl<'de> Deserialize<'de> for FeeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "无效的费用类型: '{s}'. 支持的类型: tuition, hostel, library, exam, other"
                ))
            })
    }
}

impl std::fmt::Display for FeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeType::Tuition => write!(f, "tuition"),
            FeeType::Hostel => write!(f, "hostel"),
            FeeType::Library => write!(f, "library"),
            FeeType::Exam => write!(f, "exam"),
            FeeType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for FeeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tuition" => Ok(FeeType::Tuition),
            "hostel" => Ok(FeeType::Hostel),
            "library" => Ok(FeeType::Library),
            "exam" => Ok(FeeType::Exam),
            "other" => Ok(FeeType::Other),
            _ => Err(format!("Invalid fee type: {s}")),
        }
    }
}

// 缴费状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub enum FeeStatus {
    Pending, // 待缴费
    Paid,    // 已缴费
    Overdue, // 逾期
    Waived,  // 已减免
}

impl<'de> Deserialize<'de> for FeeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的缴费状态: '{s}'. 支持的状态: pending, paid, overdue, waived"
            ))
        })
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Pending => write!(f, "pending"),
            FeeStatus::Paid => write!(f, "paid"),
            FeeStatus::Overdue => write!(f, "overdue"),
            FeeStatus::Waived => write!(f, "waived"),
        }
    }
}

impl std::str::FromStr for FeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FeeStatus::Pending),
            "paid" => Ok(FeeStatus::Paid),
            "overdue" => Ok(FeeStatus::Overdue),
            "waived" => Ok(FeeStatus::Waived),
            _ => Err(format!("Invalid fee status: {s}")),
        }
    }
}

// 缴费记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeRecord {
    pub id: i64,
    pub student_id: i64,
    pub semester: String,
    pub fee_type: FeeType,
    /// 金额（最小货币单位，如分）
    pub amount: i64,
    pub status: FeeStatus,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FeeRecord {
    /// 是否还需要缴费（待缴或逾期）
    pub fn is_payable(&self) -> bool {
        matches!(self.status, FeeStatus::Pending | FeeStatus::Overdue)
    }

    /// 是否已逾期：状态为 overdue，或待缴且已过截止时间
    pub fn is_overdue(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self.status {
            FeeStatus::Overdue => true,
            FeeStatus::Pending => self.due_date < now,
            _ => false,
        }
    }

    /// 金额的人类可读形式，用于邮件模板
    pub fn amount_display(&self) -> String {
        format!("{}.{:02}", self.amount / 100, self.amount % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fee_type_round_trip() {
        for fee_type in [
            FeeType::Tuition,
            FeeType::Hostel,
            FeeType::Library,
            FeeType::Exam,
            FeeType::Other,
        ] {
            assert_eq!(FeeType::from_str(&fee_type.to_string()).unwrap(), fee_type);
        }
    }

    #[test]
    fn test_amount_display() {
        let mut record = sample_record();
        record.amount = 1234500;
        assert_eq!(record.amount_display(), "12345.00");
        record.amount = 99;
        assert_eq!(record.amount_display(), "0.99");
    }

    #[test]
    fn test_is_overdue() {
        let now = chrono::Utc::now();
        let mut record = sample_record();

        record.due_date = now + chrono::Duration::days(7);
        assert!(!record.is_overdue(now));

        record.due_date = now - chrono::Duration::days(1);
        assert!(record.is_overdue(now));

        record.status = FeeStatus::Paid;
        assert!(!record.is_overdue(now));

        record.status = FeeStatus::Overdue;
        record.due_date = now + chrono::Duration::days(7);
        assert!(record.is_overdue(now));
    }

    #[test]
    fn test_is_payable() {
        let mut record = sample_record();
        assert!(record.is_payable());
        record.status = FeeStatus::Paid;
        assert!(!record.is_payable());
        record.status = FeeStatus::Overdue;
        assert!(record.is_payable());
        record.status = FeeStatus::Waived;
        assert!(!record.is_payable());
    }

    fn sample_record() -> FeeRecord {
        FeeRecord {
            id: 1,
            student_id: 1,
            semester: "2026-spring".to_string(),
            fee_type: FeeType::Tuition,
            amount: 100,
            status: FeeStatus::Pending,
            due_date: chrono::Utc::now(),
            paid_at: None,
            payment_method: None,
            transaction_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }
}
