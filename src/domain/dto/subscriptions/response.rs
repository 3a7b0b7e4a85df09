//! 구독 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::common::{Meta, Pagination};
use crate::domain::entities::{Subscription, SubscriptionStatus, SubscriptionTier};
use crate::errors::{AppError, AppResult};

/// 구독 응답 DTO
///
/// Stripe 고객/구독 ID는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub user_id: String,
    pub plan: String,
    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,
    pub started_at: DateTime<Utc>,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&Subscription> for SubscriptionResponse {
    type Error = AppError;

    /// 저장된 `tier`/`status` 문자열이 허용 집합 밖이면 데이터 무결성 오류로 보고합니다.
    fn try_from(subscription: &Subscription) -> Result<Self, Self::Error> {
        let narrowed = subscription
            .parsed_tier()
            .and_then(|tier| subscription.parsed_status().map(|status| (tier, status)));

        let (tier, status) = narrowed.inspect_err(|e| {
            log::warn!("구독 {} 투영 실패: {}", subscription.id, e);
        })?;

        Ok(Self {
            id: subscription.id.clone(),
            user_id: subscription.user_id.clone(),
            plan: subscription.plan.clone(),
            tier,
            status,
            started_at: subscription.started_at,
            current_period_start: subscription.current_period_start,
            current_period_end: subscription.current_period_end,
            canceled_at: subscription.canceled_at,
            trial_ends_at: subscription.trial_ends_at,
            created_at: subscription.created_at,
        })
    }
}

/// 사용자 관점의 구독 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubscriptionResponse {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionResponse>,
}

impl UserSubscriptionResponse {
    pub fn new(user_id: impl Into<String>, subscription: Option<&Subscription>) -> AppResult<Self> {
        Ok(Self {
            user_id: user_id.into(),
            subscription: subscription.map(SubscriptionResponse::try_from).transpose()?,
        })
    }
}

/// 구독 목록 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl SubscriptionListResponse {
    /// 한 건이라도 투영에 실패하면 전체 목록이 실패합니다.
    pub fn try_new<'a>(
        subscriptions: impl IntoIterator<Item = &'a Subscription>,
        pagination: &Pagination,
        total: u64,
    ) -> AppResult<Self> {
        let subscriptions = subscriptions
            .into_iter()
            .map(SubscriptionResponse::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            subscriptions,
            meta: pagination.meta(total),
        })
    }
}

/// Stripe Checkout 세션 생성 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}
