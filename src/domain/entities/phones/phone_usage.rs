//! PhoneUsage Entity Implementation

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Metadata;

/// 사용 기록 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneUsageType {
    VoiceInbound,
    VoiceOutbound,
    SmsInbound,
    SmsOutbound,
    MmsInbound,
    MmsOutbound,
}

impl PhoneUsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneUsageType::VoiceInbound => "voice_inbound",
            PhoneUsageType::VoiceOutbound => "voice_outbound",
            PhoneUsageType::SmsInbound => "sms_inbound",
            PhoneUsageType::SmsOutbound => "sms_outbound",
            PhoneUsageType::MmsInbound => "mms_inbound",
            PhoneUsageType::MmsOutbound => "mms_outbound",
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, PhoneUsageType::VoiceInbound | PhoneUsageType::VoiceOutbound)
    }

    /// SMS와 MMS를 모두 메시지로 취급합니다.
    pub fn is_message(&self) -> bool {
        !self.is_call()
    }

    pub fn is_inbound(&self) -> bool {
        matches!(
            self,
            PhoneUsageType::VoiceInbound | PhoneUsageType::SmsInbound | PhoneUsageType::MmsInbound
        )
    }
}

impl fmt::Display for PhoneUsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 통화/메시지 사용 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneUsage {
    pub id: Uuid,
    pub phone_number_id: Uuid,
    pub usage_type: PhoneUsageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,
    #[serde(default)]
    pub duration_seconds: u32,
    #[serde(default)]
    pub cost_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twilio_sid: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}

impl PhoneUsage {
    /// 상대방 번호 (수신이면 발신자, 발신이면 수신자)
    pub fn counterpart(&self) -> Option<&str> {
        if self.usage_type.is_inbound() {
            self.from_number.as_deref()
        } else {
            self.to_number.as_deref()
        }
    }
}
