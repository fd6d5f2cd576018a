//! 公告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub college_id: i64,
    pub department: Option<String>,
    pub course_id: Option<i64>,
    pub title: String,
    pub body: String,
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
    pub fn into_announcement(self) -> crate::models::announcements::entities::Announcement {
        use chrono::{DateTime, Utc};

        crate::models::announcements::entities::Announcement {
            id: self.id,
            college_id: self.college_id,
            department: self.department,
            course_id: self.course_id,
            title: self.title,
            body: self.body,
            posted_by: self.posted_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
