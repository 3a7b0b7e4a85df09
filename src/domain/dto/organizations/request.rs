//! 조직 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::PaginationConfig;
use crate::domain::dto::common::Pagination;
use crate::domain::entities::{Metadata, Organization};

/// 조직 생성 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrganizationCreateRequest {
    /// 조직 이름 (1-100자)
    #[validate(length(min = 1, max = 100, message = "조직 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// URL 식별자 (소문자, 숫자, 하이픈)
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Metadata>,
}

/// 조직 수정 요청
///
/// `settings`가 주어지면 기존 설정 맵 전체를 교체합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrganizationUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "조직 이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Metadata>,
}

impl OrganizationUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.settings.is_none()
    }
}

/// 조직 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationListQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    /// 이름 부분 일치 필터 (대소문자 무시)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OrganizationListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn pagination_with(&self, config: &PaginationConfig) -> Pagination {
        Pagination::with_config(self.page, self.limit, config)
    }

    pub fn matches(&self, organization: &Organization) -> bool {
        if organization.is_deleted() {
            return false;
        }

        self.name.as_deref().is_none_or(|name| {
            organization
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
        })
    }
}

/// 조직에 사용자 추가 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddUserToOrgRequest {
    #[validate(length(min = 1, message = "사용자 ID가 필요합니다"))]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "역할은 1-50자 사이여야 합니다"))]
    pub role: Option<String>,
}

/// slug 형식 검증
///
/// 1-63자의 소문자 알파벳, 숫자, 하이픈만 허용하며 하이픈으로 시작하거나 끝날 수 없습니다.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let valid_length = (1..=63).contains(&slug.len());
    let valid_edges = !slug.starts_with('-') && !slug.ends_with('-');

    if !(valid_chars && valid_length && valid_edges) {
        return Err(ValidationError::new("invalid_slug")
            .with_message("slug는 소문자, 숫자, 하이픈만 사용할 수 있습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_rules() {
        assert!(validate_slug("acme-corp").is_ok());
        assert!(validate_slug("team42").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Acme").is_err());
        assert!(validate_slug("-acme").is_err());
        assert!(validate_slug("acme-").is_err());
        assert!(validate_slug("acme corp").is_err());
        assert!(validate_slug(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_update_request_settings_absent_vs_present() {
        let absent: OrganizationUpdateRequest = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert!(absent.settings.is_none());

        let present: OrganizationUpdateRequest =
            serde_json::from_str(r#"{"settings": {"theme": "dark"}}"#).unwrap();
        let settings = present.settings.unwrap();
        assert_eq!(settings.get("theme").and_then(|v| v.as_str()), Some("dark"));
    }

    #[test]
    fn test_create_request_validation() {
        let request = OrganizationCreateRequest {
            name: String::new(),
            slug: "acme".to_string(),
            settings: None,
        };
        assert!(request.validate().is_err());

        let request = OrganizationCreateRequest {
            name: "Acme".to_string(),
            slug: "acme".to_string(),
            settings: None,
        };
        assert!(request.validate().is_ok());
    }
}
