//! 조직 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::common::{Meta, Pagination};
use crate::domain::entities::{Metadata, Organization};

/// 조직 응답 DTO
///
/// `updated_at`, `deleted_at`은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub settings: Metadata,
    pub created_at: DateTime<Utc>,
}

impl From<&Organization> for OrganizationResponse {
    fn from(organization: &Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name.clone(),
            slug: organization.slug.clone(),
            settings: organization.settings.clone(),
            created_at: organization.created_at,
        }
    }
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            slug: organization.slug,
            settings: organization.settings,
            created_at: organization.created_at,
        }
    }
}

/// 조직 목록 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<OrganizationResponse>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl OrganizationListResponse {
    pub fn new(
        organizations: Vec<OrganizationResponse>,
        pagination: &Pagination,
        total: u64,
    ) -> Self {
        Self {
            organizations,
            meta: pagination.meta(total),
        }
    }
}
