pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 课程作业只能由任课教师或管理员管理
    pub(crate) async fn can_manage_course(
        storage: &Arc<dyn Storage>,
        course_id: i64,
        user: &User,
    ) -> crate::errors::Result<bool> {
        if user.role == UserRole::Admin {
            return Ok(true);
        }
        if user.role != UserRole::Teacher {
            return Ok(false);
        }
        let course = storage.get_course_by_id(course_id).await?;
        Ok(course.map(|c| c.teacher_id == user.id).unwrap_or(false))
    }

    pub(crate) fn current_user(request: &HttpRequest) -> Option<User> {
        RequireJWT::extract_user_claims(request)
    }

    // 发布作业
    pub async fn create_assignment(
        &self,
        course_id: i64,
        assignment_data: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, course_id, assignment_data, request).await
    }

    // 课程作业列表
    pub async fn list_assignments(
        &self,
        course_id: i64,
        params: AssignmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, course_id, params, request).await
    }

    // 作业详情
    pub async fn get_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, assignment_id, request).await
    }

    // 更新作业
    pub async fn update_assignment(
        &self,
        assignment_id: i64,
        update_data: UpdateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, assignment_id, update_data, request).await
    }

    // 删除作业
    pub async fn delete_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, assignment_id, request).await
    }
}
