//! 招聘信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub college_id: i64,
    pub company: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub apply_url: Option<String>,
    pub deadline: Option<i64>,
    pub posted_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PostedBy",
        to = "super::users::Column::Id"
    )]
    Poster,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_job_posting(self) -> crate::models::jobs::entities::JobPosting {
        use chrono::{DateTime, Utc};

        crate::models::jobs::entities::JobPosting {
            id: self.id,
            college_id: self.college_id,
            company: self.company,
            title: self.title,
            description: self.description,
            location: self.location,
            apply_url: self.apply_url,
            deadline: self
                .deadline
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            posted_by: self.posted_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
