use super::SeaOrmStorage;
use crate::entity::feedback_entries;
use crate::entity::feedback_settings;
use crate::errors::{CampusError, Result};
use crate::models::feedback::{
    entities::{FeedbackEntry, FeedbackSettings},
    requests::{SubmitFeedbackRequest, UpsertFeedbackSettingsRequest},
    responses::FeedbackListResponse,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 更新反馈窗口设置（不存在则创建）
    pub async fn upsert_feedback_settings_impl(
        &self,
        updated_by: i64,
        req: UpsertFeedbackSettingsRequest,
    ) -> Result<FeedbackSettings> {
        let now = chrono::Utc::now().timestamp();

        let existing = feedback_settings::Entity::find()
            .filter(feedback_settings::Column::CollegeId.eq(req.college_id))
            .filter(feedback_settings::Column::Semester.eq(req.semester.clone()))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询反馈设置失败: {e}")))?;

        let model = match existing {
            Some(settings) => {
                let mut model: feedback_settings::ActiveModel = settings.into();
                model.is_open = Set(req.is_open);
                model.allow_anonymous = Set(req.allow_anonymous);
                model.opens_at = Set(req.opens_at);
                model.closes_at = Set(req.closes_at);
                model.updated_by = Set(updated_by);
                model.updated_at = Set(now);
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| {
                        CampusError::database_operation(format!("更新反馈设置失败: {e}"))
                    })?
            }
            None => {
                let model = feedback_settings::ActiveModel {
                    college_id: Set(req.college_id),
                    semester: Set(req.semester),
                    is_open: Set(req.is_open),
                    allow_anonymous: Set(req.allow_anonymous),
                    opens_at: Set(req.opens_at),
                    closes_at: Set(req.closes_at),
                    updated_by: Set(updated_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| {
                        CampusError::database_operation(format!("创建反馈设置失败: {e}"))
                    })?
            }
        };

        Ok(model.into_feedback_settings())
    }

    /// 获取反馈窗口设置
    pub async fn get_feedback_settings_impl(
        &self,
        college_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackSettings>> {
        let result = feedback_settings::Entity::find()
            .filter(feedback_settings::Column::CollegeId.eq(college_id))
            .filter(feedback_settings::Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询反馈设置失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback_settings()))
    }

    /// 提交课程反馈
    pub async fn create_feedback_entry_impl(
        &self,
        course_id: i64,
        student_id: i64,
        req: SubmitFeedbackRequest,
    ) -> Result<FeedbackEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = feedback_entries::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            semester: Set(req.semester),
            rating: Set(req.rating),
            comment: Set(req.comment),
            anonymous: Set(req.anonymous),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("提交课程反馈失败: {e}")))?;

        Ok(result.into_feedback_entry())
    }

    /// 获取某学生某学期对某课程的反馈
    pub async fn get_feedback_entry_impl(
        &self,
        course_id: i64,
        student_id: i64,
        semester: &str,
    ) -> Result<Option<FeedbackEntry>> {
        let result = feedback_entries::Entity::find()
            .filter(feedback_entries::Column::CourseId.eq(course_id))
            .filter(feedback_entries::Column::StudentId.eq(student_id))
            .filter(feedback_entries::Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程反馈失败: {e}")))?;

        Ok(result.map(|m| m.into_feedback_entry()))
    }

    /// 列出课程反馈及平均评分
    pub async fn list_feedback_entries_impl(
        &self,
        course_id: i64,
        semester: Option<&str>,
    ) -> Result<FeedbackListResponse> {
        let mut select =
            feedback_entries::Entity::find().filter(feedback_entries::Column::CourseId.eq(course_id));

        if let Some(semester) = semester {
            select = select.filter(feedback_entries::Column::Semester.eq(semester));
        }

        let entries = select
            .order_by_desc(feedback_entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程反馈失败: {e}")))?;

        let average_rating = if entries.is_empty() {
            None
        } else {
            let sum: i64 = entries.iter().map(|e| e.rating as i64).sum();
            Some(sum as f64 / entries.len() as f64)
        };

        Ok(FeedbackListResponse {
            items: entries
                .into_iter()
                .map(|m| m.into_feedback_entry())
                .collect(),
            average_rating,
        })
    }
}
