//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub college_id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub department: String,
    pub teacher_id: i64,
    pub credits: i32,
    pub semester: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
    #[sea_orm(has_many = "super::feedback_entries::Entity")]
    FeedbackEntries,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl Related<super::feedback_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedbackEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use chrono::{DateTime, Utc};

        crate::models::courses::entities::Course {
            id: self.id,
            college_id: self.college_id,
            code: self.code,
            name: self.name,
            description: self.description,
            department: self.department,
            teacher_id: self.teacher_id,
            credits: self.credits,
            semester: self.semester,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
