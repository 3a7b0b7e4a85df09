//! Organization Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::organizations::{OrganizationCreateRequest, OrganizationUpdateRequest};
use crate::domain::entities::{ApplyUpdate, Metadata};
use crate::errors::AppResult;

/// 조직 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    /// URL 식별자 (unique)
    pub slug: String,
    /// 조직별 설정 (스키마 없음, 그대로 전달)
    #[serde(default)]
    pub settings: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Organization {
    pub fn create(request: OrganizationCreateRequest, now: DateTime<Utc>) -> AppResult<Self> {
        request.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name,
            slug: request.slug,
            settings: request.settings.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// 소프트 삭제합니다. 이미 삭제된 경우 `false`를 반환합니다.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_deleted() {
            return false;
        }

        self.deleted_at = Some(now);
        self.updated_at = now;
        true
    }
}

impl ApplyUpdate<OrganizationUpdateRequest> for Organization {
    fn apply_update_at(
        &mut self,
        request: OrganizationUpdateRequest,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        request.validate()?;

        if request.is_empty() {
            return Ok(false);
        }

        if let Some(name) = request.name {
            self.name = name;
        }
        if let Some(slug) = request.slug {
            self.slug = slug;
        }
        if let Some(settings) = request.settings {
            self.settings = settings;
        }

        self.updated_at = now;
        log::debug!("조직 정보 수정 적용: {}", self.id);
        Ok(true)
    }
}
