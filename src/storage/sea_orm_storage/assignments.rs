use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 发布作业
    pub async fn create_assignment_impl(
        &self,
        course_id: i64,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            created_by: Set(created_by),
            title: Set(req.title),
            content: Set(req.content),
            max_score: Set(req.max_score),
            deadline: Set(req.deadline),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("发布作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Content.contains(&escaped)),
            );
        }

        // 临近截止的排前面
        select = select.order_by_asc(Column::Deadline);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
