//! 전화 서비스 응답 DTO
//!
//! 발급 응답만 `twilio_sid`를 포함합니다. 목록과 사용 기록 응답에서는 제외됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::common::{Meta, Pagination};
use crate::domain::entities::{
    Metadata, PhoneCapability, PhoneNumber, PhoneNumberStatus, PhoneUsage, PhoneUsageType,
};

/// 단순 구매 API가 돌려주는 상태 값
pub const PHONE_NUMBER_STATUS_PURCHASED: &str = "purchased";

/// 번호 발급 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneProvisionResponse {
    pub id: Uuid,
    pub user_id: String,
    pub number: String,
    pub twilio_sid: String,
    pub status: PhoneNumberStatus,
    pub capabilities: Vec<PhoneCapability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&PhoneNumber> for PhoneProvisionResponse {
    fn from(phone: &PhoneNumber) -> Self {
        Self {
            id: phone.id,
            user_id: phone.user_id.clone(),
            number: phone.number.clone(),
            twilio_sid: phone.twilio_sid.clone(),
            status: phone.status,
            capabilities: phone.capabilities.clone(),
            area_code: phone.area_code.clone(),
            created_at: phone.created_at,
        }
    }
}

/// 번호 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberResponse {
    pub id: Uuid,
    pub user_id: String,
    pub number: String,
    pub status: PhoneNumberStatus,
    pub capabilities: Vec<PhoneCapability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&PhoneNumber> for PhoneNumberResponse {
    fn from(phone: &PhoneNumber) -> Self {
        Self {
            id: phone.id,
            user_id: phone.user_id.clone(),
            number: phone.number.clone(),
            status: phone.status,
            capabilities: phone.capabilities.clone(),
            area_code: phone.area_code.clone(),
            created_at: phone.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberListResponse {
    pub phone_numbers: Vec<PhoneNumberResponse>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl PhoneNumberListResponse {
    pub fn new(phone_numbers: Vec<PhoneNumberResponse>, pagination: &Pagination, total: u64) -> Self {
        Self {
            phone_numbers,
            meta: pagination.meta(total),
        }
    }
}

/// 사용 기록 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneUsageResponse {
    pub id: Uuid,
    pub phone_number_id: Uuid,
    pub usage_type: PhoneUsageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,
    pub duration_seconds: u32,
    pub cost_cents: u64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}

impl From<&PhoneUsage> for PhoneUsageResponse {
    fn from(usage: &PhoneUsage) -> Self {
        Self {
            id: usage.id,
            phone_number_id: usage.phone_number_id,
            usage_type: usage.usage_type,
            from_number: usage.from_number.clone(),
            to_number: usage.to_number.clone(),
            duration_seconds: usage.duration_seconds,
            cost_cents: usage.cost_cents,
            status: usage.status.clone(),
            metadata: usage.metadata.clone(),
            created_at: usage.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneUsageListResponse {
    pub usage: Vec<PhoneUsageResponse>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl PhoneUsageListResponse {
    pub fn new(usage: Vec<PhoneUsageResponse>, pagination: &Pagination, total: u64) -> Self {
        Self {
            usage,
            meta: pagination.meta(total),
        }
    }
}

/// 단순 구매 API 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasePhoneNumberResponse {
    pub phone_number: String,
    pub sid: String,
    pub status: String,
}

impl PurchasePhoneNumberResponse {
    pub fn purchased(phone_number: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            sid: sid.into(),
            status: PHONE_NUMBER_STATUS_PURCHASED.to_string(),
        }
    }
}
