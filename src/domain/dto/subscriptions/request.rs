//! 구독 요청 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::PaginationConfig;
use crate::domain::dto::common::Pagination;
use crate::domain::entities::{Subscription, SubscriptionStatus, SubscriptionTier};

/// 구독 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_create_period"))]
pub struct SubscriptionCreateRequest {
    #[validate(length(min = 1, message = "사용자 ID가 필요합니다"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "Stripe 고객 ID가 필요합니다"))]
    pub stripe_customer_id: String,

    #[validate(length(min = 1, message = "Stripe 구독 ID가 필요합니다"))]
    pub stripe_subscription_id: String,

    #[validate(length(min = 1, message = "요금제가 필요합니다"))]
    pub plan: String,

    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,

    /// 구독 시작 시각 (없으면 생성 시각)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
}

fn validate_create_period(req: &SubscriptionCreateRequest) -> Result<(), ValidationError> {
    if req.current_period_start > req.current_period_end {
        return Err(ValidationError::new("invalid_period")
            .with_message("기간 시작은 기간 종료보다 늦을 수 없습니다".into()));
    }
    Ok(())
}

/// 구독 수정 요청
///
/// 구독 레코드와 사용자 레코드의 구독 미러 필드 모두에 적용됩니다.
/// `tier`/`status`는 닫힌 열거형이므로 집합 밖의 값은 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_customer_id"))]
pub struct SubscriptionUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SubscriptionTier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "요금제는 비어 있을 수 없습니다"))]
    pub plan: Option<String>,

    /// 구독 레코드 내부 필드. 에러 메시지에 필드 경로가 드러나지 않도록 구조체 단위로 검증합니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,

    /// 사용자 레코드 전용
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_subscription: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
}

fn validate_update_customer_id(req: &SubscriptionUpdateRequest) -> Result<(), ValidationError> {
    if req.stripe_customer_id.as_deref().is_some_and(str::is_empty) {
        return Err(ValidationError::new("empty_customer_id")
            .with_message("결제 고객 식별자는 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

impl SubscriptionUpdateRequest {
    pub fn is_empty(&self) -> bool {
        !self.touches_subscription() && self.has_active_subscription.is_none()
    }

    /// 구독 레코드에 적용될 필드가 있는지 확인
    pub fn touches_subscription(&self) -> bool {
        self.status.is_some()
            || self.tier.is_some()
            || self.plan.is_some()
            || self.stripe_customer_id.is_some()
            || self.current_period_start.is_some()
            || self.current_period_end.is_some()
            || self.canceled_at.is_some()
            || self.trial_ends_at.is_some()
    }
}

/// 구독 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SubscriptionTier>,
}

impl SubscriptionListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn pagination_with(&self, config: &PaginationConfig) -> Pagination {
        Pagination::with_config(self.page, self.limit, config)
    }

    pub fn matches(&self, subscription: &Subscription) -> bool {
        self.user_id
            .as_ref()
            .is_none_or(|user_id| &subscription.user_id == user_id)
            && self
                .status
                .is_none_or(|status| subscription.status == status.as_str())
            && self.tier.is_none_or(|tier| subscription.tier == tier.as_str())
    }
}

/// Stripe Checkout 세션 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutSessionRequest {
    #[serde(rename = "customerId")]
    #[validate(length(min = 1, message = "고객 ID가 필요합니다"))]
    pub customer_id: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub tier: SubscriptionTier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_out_of_set_enum_rejected_on_input() {
        let result: Result<SubscriptionUpdateRequest, _> =
            serde_json::from_str(r#"{"status": "paused"}"#);
        assert!(result.is_err());

        let request: SubscriptionUpdateRequest =
            serde_json::from_str(r#"{"status": "past_due", "tier": null}"#).unwrap();
        assert_eq!(request.status, Some(SubscriptionStatus::PastDue));
        assert!(request.tier.is_none());
    }

    #[test]
    fn test_blank_customer_id_error_hides_field_name() {
        let request = SubscriptionUpdateRequest {
            stripe_customer_id: Some(String::new()),
            ..Default::default()
        };

        let err = AppError::from(request.validate().unwrap_err());
        let message = err.to_string();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(message.contains("결제 고객 식별자"));
        assert!(!message.contains("stripe_customer_id"));

        let request = SubscriptionUpdateRequest {
            stripe_customer_id: Some("cus_2".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_checkout_wire_names() {
        let request: CheckoutSessionRequest = serde_json::from_str(
            r#"{"customerId": "cus_1", "email": "a@x.com", "tier": "enterprise"}"#,
        )
        .unwrap();

        assert_eq!(request.customer_id, "cus_1");
        assert_eq!(request.tier, SubscriptionTier::Enterprise);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_is_empty_counts_user_mirror_field() {
        let request = SubscriptionUpdateRequest {
            has_active_subscription: Some(true),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert!(!request.touches_subscription());
        assert!(SubscriptionUpdateRequest::default().is_empty());
    }
}
