//! 反馈窗口设置实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub college_id: i64,
    pub semester: String,
    pub is_open: bool,
    pub allow_anonymous: bool,
    pub opens_at: Option<i64>,
    pub closes_at: Option<i64>,
    pub updated_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_feedback_settings(self) -> crate::models::feedback::entities::FeedbackSettings {
        use chrono::{DateTime, Utc};

        crate::models::feedback::entities::FeedbackSettings {
            id: self.id,
            college_id: self.college_id,
            semester: self.semester,
            is_open: self.is_open,
            allow_anonymous: self.allow_anonymous,
            opens_at: self
                .opens_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            closes_at: self
                .closes_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            updated_by: self.updated_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
