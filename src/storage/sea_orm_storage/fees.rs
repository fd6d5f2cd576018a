use super::SeaOrmStorage;
use crate::entity::fee_records::{ActiveModel, Column, Entity as FeeRecords};
use crate::entity::users;
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    fees::{
        entities::{FeeRecord, FeeStatus, FeeType},
        requests::{CreateFeeRecordRequest, FeeListQuery},
        responses::FeeListResponse,
    },
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建缴费记录
    pub async fn create_fee_record_impl(&self, req: CreateFeeRecordRequest) -> Result<FeeRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            semester: Set(req.semester),
            fee_type: Set(req.fee_type.to_string()),
            amount: Set(req.amount),
            status: Set(FeeStatus::Pending.to_string()),
            due_date: Set(req.due_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建缴费记录失败: {e}")))?;

        Ok(result.into_fee_record())
    }

    /// 通过 ID 获取缴费记录
    pub async fn get_fee_record_by_id_impl(&self, id: i64) -> Result<Option<FeeRecord>> {
        let result = FeeRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_record()))
    }

    /// 获取某学生某学期某类型的缴费记录
    pub async fn get_fee_record_impl(
        &self,
        student_id: i64,
        semester: &str,
        fee_type: &FeeType,
    ) -> Result<Option<FeeRecord>> {
        let result = FeeRecords::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Semester.eq(semester))
            .filter(Column::FeeType.eq(fee_type.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_record()))
    }

    /// 分页列出缴费记录
    pub async fn list_fee_records_with_pagination_impl(
        &self,
        query: FeeListQuery,
    ) -> Result<FeeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = FeeRecords::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(ref fee_type) = query.fee_type {
            select = select.filter(Column::FeeType.eq(fee_type.to_string()));
        }

        if let Some(ref status) = query.status {
            // 逾期是读取时从 pending + 过期截止时间推导的，过滤条件要做同样的换算
            let now = chrono::Utc::now().timestamp();
            select = match status {
                FeeStatus::Overdue => select.filter(
                    Condition::any()
                        .add(Column::Status.eq(FeeStatus::Overdue.to_string()))
                        .add(
                            Condition::all()
                                .add(Column::Status.eq(FeeStatus::Pending.to_string()))
                                .add(Column::DueDate.lt(now)),
                        ),
                ),
                FeeStatus::Pending => select.filter(
                    Condition::all()
                        .add(Column::Status.eq(FeeStatus::Pending.to_string()))
                        .add(Column::DueDate.gte(now)),
                ),
                other => select.filter(Column::Status.eq(other.to_string())),
            };
        }

        select = select.order_by_asc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费页数失败: {e}")))?;

        let records = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询缴费列表失败: {e}")))?;

        Ok(FeeListResponse {
            items: records.into_iter().map(|m| m.into_fee_record()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 标记缴费完成
    pub async fn mark_fee_paid_impl(
        &self,
        id: i64,
        payment_method: &str,
        transaction_id: &str,
    ) -> Result<Option<FeeRecord>> {
        let existing = self.get_fee_record_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(FeeStatus::Paid.to_string()),
            paid_at: Set(Some(now)),
            payment_method: Set(Some(payment_method.to_string())),
            transaction_id: Set(Some(transaction_id.to_string())),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新缴费记录失败: {e}")))?;

        self.get_fee_record_by_id_impl(id).await
    }

    /// 列出待缴费记录及对应学生（批量催缴用）
    pub async fn list_payable_fee_records_impl(
        &self,
        semester: &str,
        fee_type: Option<&FeeType>,
    ) -> Result<Vec<(FeeRecord, User)>> {
        let mut select = FeeRecords::find()
            .filter(Column::Semester.eq(semester))
            .filter(
                Condition::any()
                    .add(Column::Status.eq(FeeStatus::Pending.to_string()))
                    .add(Column::Status.eq(FeeStatus::Overdue.to_string())),
            );

        if let Some(fee_type) = fee_type {
            select = select.filter(Column::FeeType.eq(fee_type.to_string()));
        }

        let records = select
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询待缴费记录失败: {e}")))?;

        // 逐条带出学生信息，孤儿记录（学生已删除）跳过
        let mut result = Vec::with_capacity(records.len());
        for record in records {
            let student = record
                .find_related(users::Entity)
                .one(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询缴费学生失败: {e}")))?;

            if let Some(student) = student {
                result.push((record.into_fee_record(), student.into_user()));
            }
        }

        Ok(result)
    }
}
