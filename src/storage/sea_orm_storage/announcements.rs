use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 发布公告
    pub async fn create_announcement_impl(
        &self,
        college_id: i64,
        posted_by: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            college_id: Set(college_id),
            department: Set(req.department),
            course_id: Set(req.course_id),
            title: Set(req.title),
            body: Set(req.body),
            posted_by: Set(posted_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 通过 ID 获取公告
    pub async fn get_announcement_by_id_impl(&self, id: i64) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 分页列出公告
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Announcements::find();

        if let Some(college_id) = query.college_id {
            select = select.filter(Column::CollegeId.eq(college_id));
        }

        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

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
                    .add(Column::Body.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告页数失败: {e}")))?;

        let announcements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: announcements
                .into_iter()
                .map(|m| m.into_announcement())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新公告
    pub async fn update_announcement_impl(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        let existing = self.get_announcement_by_id_impl(id).await?;
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

        if let Some(body) = update.body {
            model.body = Set(body);
        }

        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }

        if let Some(course_id) = update.course_id {
            model.course_id = Set(Some(course_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新公告失败: {e}")))?;

        self.get_announcement_by_id_impl(id).await
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
