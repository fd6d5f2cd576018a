use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::{EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::EnrollmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            semester: Set(semester.to_string()),
            status: Set(EnrollmentStatus::Enrolled.to_string()),
            enrolled_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 获取某学生某学期对某课程的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
        semester: &str,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 分页列出选课记录
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课页数失败: {e}")))?;

        let enrollments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(EnrollmentListResponse {
            items: enrollments
                .into_iter()
                .map(|m| m.into_enrollment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新选课记录（状态、成绩）
    pub async fn update_enrollment_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        let existing = self.get_enrollment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(grade) = update.grade {
            model.grade = Set(Some(grade));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新选课记录失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }
}
