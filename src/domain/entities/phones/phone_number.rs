//! PhoneNumber Entity Implementation
//!
//! 전화 서비스가 Twilio를 통해 발급한 번호 레코드입니다.
//! `released` 상태는 종료 상태이며 이후의 어떤 수정도 거부됩니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::phones::{PhoneNumberUpdateRequest, PhoneProvisionRequest};
use crate::domain::entities::{ApplyUpdate, Metadata};
use crate::errors::{AppError, AppResult};

/// 전화번호 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneNumberStatus {
    Active,
    Inactive,
    Suspended,
    Released,
}

impl PhoneNumberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneNumberStatus::Active => "active",
            PhoneNumberStatus::Inactive => "inactive",
            PhoneNumberStatus::Suspended => "suspended",
            PhoneNumberStatus::Released => "released",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PhoneNumberStatus::Released)
    }
}

impl fmt::Display for PhoneNumberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneNumberStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PhoneNumberStatus::Active),
            "inactive" => Ok(PhoneNumberStatus::Inactive),
            "suspended" => Ok(PhoneNumberStatus::Suspended),
            "released" => Ok(PhoneNumberStatus::Released),
            other => Err(AppError::ValidationError(format!(
                "알 수 없는 전화번호 상태: {}",
                other
            ))),
        }
    }
}

/// 전화번호 기능
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneCapability {
    Voice,
    Sms,
    Mms,
}

impl PhoneCapability {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneCapability::Voice => "voice",
            PhoneCapability::Sms => "sms",
            PhoneCapability::Mms => "mms",
        }
    }
}

/// 전화번호 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: Uuid,
    pub user_id: String,
    /// E.164 형식 번호
    pub number: String,
    pub twilio_sid: String,
    pub status: PhoneNumberStatus,
    pub capabilities: Vec<PhoneCapability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub configuration: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PhoneNumber {
    /// 공급자가 발급한 번호로 새 레코드를 만듭니다.
    ///
    /// `number`와 `twilio_sid`는 공급자 응답에서 얻은 값이어야 합니다.
    pub fn provision(
        request: PhoneProvisionRequest,
        number: impl Into<String>,
        twilio_sid: impl Into<String>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        request.validate()?;

        let number = number.into();
        let twilio_sid = twilio_sid.into();
        if number.is_empty() || twilio_sid.is_empty() {
            return Err(AppError::ExternalServiceError(
                "공급자가 번호 또는 SID를 반환하지 않았습니다".to_string(),
            ));
        }

        let mut capabilities = request.capabilities;
        capabilities.sort();
        capabilities.dedup();

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            number,
            twilio_sid,
            status: PhoneNumberStatus::Active,
            capabilities,
            area_code: request.area_code,
            configuration: Metadata::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_released(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn has_capability(&self, capability: PhoneCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn suspend(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        self.apply_update_at(PhoneNumberUpdateRequest::status(PhoneNumberStatus::Suspended), now)
    }

    pub fn reactivate(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        self.apply_update_at(PhoneNumberUpdateRequest::status(PhoneNumberStatus::Active), now)
    }

    /// 번호를 반납합니다. 반납 후에는 어떤 수정도 허용되지 않습니다.
    pub fn release(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        self.apply_update_at(PhoneNumberUpdateRequest::status(PhoneNumberStatus::Released), now)
    }

    /// 번호 설정 맵 전체를 교체합니다.
    pub fn update_configuration(
        &mut self,
        configuration: Metadata,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        self.apply_update_at(
            PhoneNumberUpdateRequest {
                configuration: Some(configuration),
                ..Default::default()
            },
            now,
        )
    }
}

impl ApplyUpdate<PhoneNumberUpdateRequest> for PhoneNumber {
    fn apply_update_at(
        &mut self,
        request: PhoneNumberUpdateRequest,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        request.validate()?;

        if request.is_empty() {
            return Ok(false);
        }

        if self.is_released() {
            log::warn!("반납된 번호에 대한 수정 시도: {}", self.id);
            return Err(AppError::ConflictError(
                "반납된 전화번호는 수정할 수 없습니다".to_string(),
            ));
        }

        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(mut capabilities) = request.capabilities {
            capabilities.sort();
            capabilities.dedup();
            self.capabilities = capabilities;
        }
        if let Some(configuration) = request.configuration {
            self.configuration = configuration;
        }

        self.updated_at = now;
        log::debug!("전화번호 수정 적용: {} (status={})", self.id, self.status);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::phones::{PhoneNumberResponse, PhoneProvisionResponse};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn provisioned() -> PhoneNumber {
        PhoneNumber::provision(
            PhoneProvisionRequest {
                user_id: "user-1".to_string(),
                area_code: Some("415".to_string()),
                capabilities: vec![PhoneCapability::Sms, PhoneCapability::Voice, PhoneCapability::Sms],
            },
            "+14155550100",
            "PN123",
            now(),
        )
        .unwrap()
    }

    #[test]
    fn test_provision_normalizes_capabilities() {
        let phone = provisioned();

        assert_eq!(phone.status, PhoneNumberStatus::Active);
        assert_eq!(phone.capabilities, vec![PhoneCapability::Voice, PhoneCapability::Sms]);
        assert!(phone.has_capability(PhoneCapability::Sms));
        assert!(!phone.has_capability(PhoneCapability::Mms));
    }

    #[test]
    fn test_provision_requires_capabilities() {
        let result = PhoneNumber::provision(
            PhoneProvisionRequest {
                user_id: "user-1".to_string(),
                area_code: None,
                capabilities: vec![],
            },
            "+14155550100",
            "PN123",
            now(),
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_provision_response_keeps_sid_listing_drops_it() {
        let mut phone = provisioned();
        phone.configuration.insert("voice_url".to_string(), json!("https://hooks/voice"));

        let provision = serde_json::to_value(PhoneProvisionResponse::from(&phone)).unwrap();
        assert_eq!(provision["twilio_sid"], "PN123");

        let listing = serde_json::to_string(&PhoneNumberResponse::from(&phone)).unwrap();
        assert!(!listing.contains("PN123"));
        assert!(!listing.contains("twilio_sid"));
        assert!(!listing.contains("hooks/voice"));
    }

    #[test]
    fn test_suspend_and_reactivate() {
        let mut phone = provisioned();

        phone.suspend(now() + Duration::minutes(1)).unwrap();
        assert_eq!(phone.status, PhoneNumberStatus::Suspended);

        phone.reactivate(now() + Duration::minutes(2)).unwrap();
        assert_eq!(phone.status, PhoneNumberStatus::Active);
        assert_eq!(phone.updated_at, now() + Duration::minutes(2));
    }

    #[test]
    fn test_released_number_rejects_updates() {
        let mut phone = provisioned();
        phone.release(now() + Duration::hours(1)).unwrap();
        let released = phone.clone();

        assert!(matches!(
            phone.reactivate(now() + Duration::hours(2)),
            Err(AppError::ConflictError(_))
        ));
        assert!(phone
            .update_configuration(Metadata::new(), now() + Duration::hours(2))
            .is_err());
        assert_eq!(phone, released);
    }

    #[test]
    fn test_update_configuration_replaces_map() {
        let mut phone = provisioned();
        let mut configuration = Metadata::new();
        configuration.insert("sms_url".to_string(), json!("https://hooks/sms"));
        configuration.insert("record".to_string(), json!(true));

        assert!(phone
            .update_configuration(configuration.clone(), now() + Duration::minutes(5))
            .unwrap());
        assert_eq!(phone.configuration, configuration);
    }

    #[test]
    fn test_empty_capabilities_update_rejected() {
        let mut phone = provisioned();
        let before = phone.clone();

        let result = phone.apply_update_at(
            PhoneNumberUpdateRequest {
                status: Some(PhoneNumberStatus::Inactive),
                capabilities: Some(vec![]),
                configuration: None,
            },
            now() + Duration::minutes(1),
        );

        assert!(result.is_err());
        assert_eq!(phone, before);
    }
}
