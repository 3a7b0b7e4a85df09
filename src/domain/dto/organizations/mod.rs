//! 조직 서비스 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{
    AddUserToOrgRequest, OrganizationCreateRequest, OrganizationListQuery,
    OrganizationUpdateRequest, validate_slug,
};
pub use response::{OrganizationListResponse, OrganizationResponse};
