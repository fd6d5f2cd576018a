//! 选课记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub semester: String,
    pub status: String,
    pub grade: Option<String>,
    pub enrolled_at: i64,
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
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_enrollment(self) -> crate::models::enrollments::entities::Enrollment {
        use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
        use chrono::{DateTime, Utc};

        Enrollment {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            semester: self.semester,
            status: self
                .status
                .parse::<EnrollmentStatus>()
                .unwrap_or(EnrollmentStatus::Enrolled),
            grade: self.grade,
            enrolled_at: DateTime::<Utc>::from_timestamp(self.enrolled_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
