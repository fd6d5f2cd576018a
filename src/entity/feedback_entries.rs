//! 课程反馈实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    pub semester: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub anonymous: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// 匿名反馈在转换时即隐藏学生ID，上层不需要再做判断。
impl Model {
    pub fn into_feedback_entry(self) -> crate::models::feedback::entities::FeedbackEntry {
        use chrono::{DateTime, Utc};

        crate::models::feedback::entities::FeedbackEntry {
            id: self.id,
            course_id: self.course_id,
            student_id: if self.anonymous {
                None
            } else {
                Some(self.student_id)
            },
            semester: self.semester,
            rating: self.rating,
            comment: self.comment,
            anonymous: self.anonymous,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
