//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub created_by: i64,
    pub title: String,
    pub content: String,
    pub max_score: i32,
    pub deadline: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use chrono::{DateTime, Utc};

        crate::models::assignments::entities::Assignment {
            id: self.id,
            course_id: self.course_id,
            created_by: self.created_by,
            title: self.title,
            content: self.content,
            max_score: self.max_score,
            deadline: DateTime::<Utc>::from_timestamp(self.deadline, 0).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
