//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub college_id: Option<i64>,
    pub department: Option<String>,
    pub display_name: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
    #[sea_orm(has_many = "super::fee_records::Entity")]
    FeeRecords,
    #[sea_orm(has_many = "super::announcements::Entity")]
    Announcements,
    #[sea_orm(has_many = "super::job_postings::Entity")]
    JobPostings,
    #[sea_orm(has_many = "super::feedback_entries::Entity")]
    FeedbackEntries,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl Related<super::fee_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeRecords.def()
    }
}

impl Related<super::announcements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Announcements.def()
    }
}

impl Related<super::job_postings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPostings.def()
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
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            college_id: self.college_id,
            department: self.department,
            display_name: self.display_name,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
