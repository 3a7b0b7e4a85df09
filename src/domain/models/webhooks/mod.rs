//! 외부 웹훅 페이로드 모델
//!
//! 서명 검증과 본문 해석은 각 웹훅을 받는 서비스가 수행합니다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Twilio 웹훅의 폼 필드 (키-값 문자열)
pub type TwilioWebhookData = BTreeMap<String, String>;

/// Stripe 웹훅 이벤트 봉투
///
/// `data`는 이벤트 종류마다 구조가 달라 해석하지 않고 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeWebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub object: String,
}
