use super::SeaOrmStorage;
use crate::entity::job_postings::{ActiveModel, Column, Entity as JobPostings};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    jobs::{
        entities::JobPosting,
        requests::{CreateJobPostingRequest, JobPostingListQuery, UpdateJobPostingRequest},
        responses::JobPostingListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 发布招聘信息
    pub async fn create_job_posting_impl(
        &self,
        college_id: i64,
        posted_by: i64,
        req: CreateJobPostingRequest,
    ) -> Result<JobPosting> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            college_id: Set(college_id),
            company: Set(req.company),
            title: Set(req.title),
            description: Set(req.description),
            location: Set(req.location),
            apply_url: Set(req.apply_url),
            deadline: Set(req.deadline),
            posted_by: Set(posted_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("发布招聘信息失败: {e}")))?;

        Ok(result.into_job_posting())
    }

    /// 通过 ID 获取招聘信息
    pub async fn get_job_posting_by_id_impl(&self, id: i64) -> Result<Option<JobPosting>> {
        let result = JobPostings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询招聘信息失败: {e}")))?;

        Ok(result.map(|m| m.into_job_posting()))
    }

    /// 分页列出招聘信息
    pub async fn list_job_postings_with_pagination_impl(
        &self,
        query: JobPostingListQuery,
    ) -> Result<JobPostingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = JobPostings::find();

        if let Some(college_id) = query.college_id {
            select = select.filter(Column::CollegeId.eq(college_id));
        }

        if let Some(ref company) = query.company {
            select = select.filter(Column::Company.eq(company));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Company.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询招聘总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询招聘页数失败: {e}")))?;

        let postings = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询招聘列表失败: {e}")))?;

        Ok(JobPostingListResponse {
            items: postings.into_iter().map(|m| m.into_job_posting()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新招聘信息
    pub async fn update_job_posting_impl(
        &self,
        id: i64,
        update: UpdateJobPostingRequest,
    ) -> Result<Option<JobPosting>> {
        let existing = self.get_job_posting_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(company) = update.company {
            model.company = Set(company);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }

        if let Some(apply_url) = update.apply_url {
            model.apply_url = Set(Some(apply_url));
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(Some(deadline));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新招聘信息失败: {e}")))?;

        self.get_job_posting_by_id_impl(id).await
    }

    /// 删除招聘信息
    pub async fn delete_job_posting_impl(&self, id: i64) -> Result<bool> {
        let result = JobPostings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除招聘信息失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
