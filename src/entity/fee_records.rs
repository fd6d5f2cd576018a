//! 缴费记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: String,
    pub fee_type: String,
    pub amount: i64,
    pub status: String,
    pub due_date: i64,
    pub paid_at: Option<i64>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_fee_record(self) -> crate::models::fees::entities::FeeRecord {
        use crate::models::fees::entities::{FeeRecord, FeeStatus, FeeType};
        use chrono::{DateTime, Utc};

        // 逾期状态在读取时推导：待缴且已过截止时间的记录呈现为 overdue，
        // 数据库里不回写
        let mut status = self
            .status
            .parse::<FeeStatus>()
            .unwrap_or(FeeStatus::Pending);
        if status == FeeStatus::Pending && self.due_date < Utc::now().timestamp() {
            status = FeeStatus::Overdue;
        }

        FeeRecord {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            fee_type: self.fee_type.parse::<FeeType>().unwrap_or(FeeType::Other),
            amount: self.amount,
            status,
            due_date: DateTime::<Utc>::from_timestamp(self.due_date, 0).unwrap_or_default(),
            paid_at: self
                .paid_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            payment_method: self.payment_method,
            transaction_id: self.transaction_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fees::entities::FeeStatus;

    fn sample_model(status: &str, due_date: i64) -> Model {
        Model {
            id: 1,
            student_id: 1,
            semester: "2026-spring".to_string(),
            fee_type: "tuition".to_string(),
            amount: 500000,
            status: status.to_string(),
            due_date,
            paid_at: None,
            payment_method: None,
            transaction_id: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_pending_past_due_reads_as_overdue() {
        let now = chrono::Utc::now().timestamp();

        let record = sample_model("pending", now - 86400).into_fee_record();
        assert_eq!(record.status, FeeStatus::Overdue);

        let record = sample_model("pending", now + 86400).into_fee_record();
        assert_eq!(record.status, FeeStatus::Pending);
    }

    #[test]
    fn test_paid_past_due_stays_paid() {
        let now = chrono::Utc::now().timestamp();
        let record = sample_model("paid", now - 86400).into_fee_record();
        assert_eq!(record.status, FeeStatus::Paid);
    }
}
