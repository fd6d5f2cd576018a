use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{CampusError, Result};
use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceStatus},
    requests::{AttendanceEntry, AttendanceListParams},
    responses::AttendanceSummaryResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量标记考勤
    ///
    /// 同一课程同一学生同一天已有记录时覆盖状态，整批在一个事务内完成。
    pub async fn upsert_attendance_impl(
        &self,
        course_id: i64,
        marked_by: i64,
        date: &str,
        entries: &[AttendanceEntry],
    ) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启考勤事务失败: {e}")))?;

        let mut marked = 0usize;
        for entry in entries {
            let existing = AttendanceRecords::find()
                .filter(Column::CourseId.eq(course_id))
                .filter(Column::StudentId.eq(entry.student_id))
                .filter(Column::Date.eq(date))
                .one(&txn)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询考勤记录失败: {e}")))?;

            match existing {
                Some(record) => {
                    let mut model: ActiveModel = record.into();
                    model.status = Set(entry.status.to_string());
                    model.marked_by = Set(marked_by);
                    model
                        .update(&txn)
                        .await
                        .map_err(|e| {
                            CampusError::database_operation(format!("更新考勤记录失败: {e}"))
                        })?;
                }
                None => {
                    let model = ActiveModel {
                        course_id: Set(course_id),
                        student_id: Set(entry.student_id),
                        date: Set(date.to_string()),
                        status: Set(entry.status.to_string()),
                        marked_by: Set(marked_by),
                        created_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(&txn).await.map_err(|e| {
                        CampusError::database_operation(format!("写入考勤记录失败: {e}"))
                    })?;
                }
            }
            marked += 1;
        }

        txn.commit()
            .await
            .map_err(|e| CampusError::database_operation(format!("提交考勤事务失败: {e}")))?;

        Ok(marked)
    }

    /// 列出考勤记录
    pub async fn list_attendance_impl(
        &self,
        course_id: i64,
        params: &AttendanceListParams,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find().filter(Column::CourseId.eq(course_id));

        if let Some(ref date) = params.date {
            select = select.filter(Column::Date.eq(date));
        }

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let records = select
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }

    /// 学生考勤汇总
    pub async fn get_attendance_summary_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<AttendanceSummaryResponse> {
        let count_status = |status: AttendanceStatus| {
            AttendanceRecords::find()
                .filter(Column::CourseId.eq(course_id))
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Status.eq(status.to_string()))
                .count(&self.db)
        };

        let present = count_status(AttendanceStatus::Present)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计考勤失败: {e}")))?
            as i64;
        let absent = count_status(AttendanceStatus::Absent)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计考勤失败: {e}")))?
            as i64;
        let late = count_status(AttendanceStatus::Late)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计考勤失败: {e}")))?
            as i64;
        let excused = count_status(AttendanceStatus::Excused)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计考勤失败: {e}")))?
            as i64;

        let total = present + absent + late + excused;
        let attendance_rate = if total > 0 {
            (present + late) as f64 * 100.0 / total as f64
        } else {
            0.0
        };

        Ok(AttendanceSummaryResponse {
            course_id,
            student_id,
            total,
            present,
            absent,
            late,
            excused,
            attendance_rate,
        })
    }
}
