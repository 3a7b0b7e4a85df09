//! 전화 서비스 요청 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::PaginationConfig;
use crate::domain::dto::common::Pagination;
use crate::domain::entities::{
    Metadata, PhoneCapability, PhoneNumber, PhoneNumberStatus, PhoneUsage, PhoneUsageType,
};

/// 국가 코드를 지정하지 않은 구매 요청의 기본값
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// 번호 발급 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PhoneProvisionRequest {
    #[validate(length(min = 1, message = "사용자 ID가 필요합니다"))]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_area_code"))]
    pub area_code: Option<String>,

    #[validate(length(min = 1, message = "최소 하나의 기능이 필요합니다"))]
    pub capabilities: Vec<PhoneCapability>,
}

/// 번호 수정 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PhoneNumberUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneNumberStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "최소 하나의 기능이 필요합니다"))]
    pub capabilities: Option<Vec<PhoneCapability>>,

    /// 주어지면 기존 설정 맵 전체를 교체
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Metadata>,
}

impl PhoneNumberUpdateRequest {
    pub fn status(status: PhoneNumberStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.capabilities.is_none() && self.configuration.is_none()
    }
}

/// 단순 구매 API 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PurchasePhoneNumberRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_area_code"))]
    pub area_code: Option<String>,

    /// ISO 3166-1 alpha-2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 2, message = "국가 코드는 2자여야 합니다"))]
    pub country_code: Option<String>,
}

impl PurchasePhoneNumberRequest {
    /// 지정된 국가 코드, 없으면 `US`
    pub fn country_code(&self) -> &str {
        self.country_code.as_deref().unwrap_or(DEFAULT_COUNTRY_CODE)
    }
}

/// 번호 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberListQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneNumberStatus>,
}

impl PhoneNumberListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn pagination_with(&self, config: &PaginationConfig) -> Pagination {
        Pagination::with_config(self.page, self.limit, config)
    }

    pub fn matches(&self, phone: &PhoneNumber) -> bool {
        self.user_id
            .as_ref()
            .is_none_or(|user_id| &phone.user_id == user_id)
            && self.status.is_none_or(|status| phone.status == status)
    }
}

/// 사용 기록 조회 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneUsageListQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<PhoneUsageType>,
}

impl PhoneUsageListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn matches(&self, usage: &PhoneUsage) -> bool {
        self.phone_number_id
            .is_none_or(|id| usage.phone_number_id == id)
            && self.usage_type.is_none_or(|kind| usage.usage_type == kind)
    }
}

/// 지역 번호 형식 검증 (숫자 3자리)
fn validate_area_code(area_code: &str) -> Result<(), ValidationError> {
    if area_code.len() != 3 || !area_code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_area_code")
            .with_message("지역 번호는 숫자 3자리여야 합니다".into()));
    }
    Ok(())
}
