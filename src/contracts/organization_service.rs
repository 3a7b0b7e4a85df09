//! 조직 서비스 클라이언트 계약

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::dto::common::HealthResponse;
use crate::domain::dto::organizations::{
    AddUserToOrgRequest, OrganizationCreateRequest, OrganizationListQuery,
    OrganizationListResponse, OrganizationResponse, OrganizationUpdateRequest,
};
use crate::domain::dto::users::{UserListQuery, UserListResponse, UserResponse};
use crate::errors::AppResult;

/// 조직 서비스가 호출자에게 제공하는 원격 연산
#[async_trait]
pub trait OrganizationServiceClient: Send + Sync {
    async fn create_organization(
        &self,
        request: OrganizationCreateRequest,
    ) -> AppResult<OrganizationResponse>;
    async fn get_organization_by_id(&self, id: Uuid) -> AppResult<OrganizationResponse>;
    async fn update_organization(
        &self,
        id: Uuid,
        request: OrganizationUpdateRequest,
    ) -> AppResult<OrganizationResponse>;
    async fn delete_organization(&self, id: Uuid) -> AppResult<()>;
    async fn list_organizations(
        &self,
        query: OrganizationListQuery,
    ) -> AppResult<OrganizationListResponse>;

    // 조직 구성원
    async fn list_organization_users(
        &self,
        id: Uuid,
        query: UserListQuery,
    ) -> AppResult<UserListResponse>;
    async fn add_user_to_organization(
        &self,
        org_id: Uuid,
        request: AddUserToOrgRequest,
    ) -> AppResult<UserResponse>;
    async fn remove_user_from_organization(&self, org_id: Uuid, user_id: &str) -> AppResult<()>;

    async fn health(&self) -> AppResult<HealthResponse>;
}
