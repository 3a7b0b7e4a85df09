//! Subscription Entity Implementation
//!
//! 구독 서비스가 소유하는 Stripe 구독 레코드입니다.
//! `tier`와 `status`는 저장소에 자유 형식 문자열로 보관되며,
//! 응답으로 투영할 때 닫힌 열거형으로 좁혀집니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::subscriptions::{SubscriptionCreateRequest, SubscriptionUpdateRequest};
use crate::domain::entities::ApplyUpdate;
use crate::errors::{AppError, AppResult};

/// 구독 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Basic,
    Pro,
    Enterprise,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SubscriptionTier::Basic),
            "pro" => Ok(SubscriptionTier::Pro),
            "enterprise" => Ok(SubscriptionTier::Enterprise),
            other => Err(AppError::ValidationError(format!(
                "알 수 없는 구독 등급: {}",
                other
            ))),
        }
    }
}

/// 구독 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Trialing,
    Incomplete,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Incomplete => "incomplete",
        }
    }

    /// 서비스 이용이 허용되는 상태인지 확인
    pub fn grants_access(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trialing)
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "canceled" => Ok(SubscriptionStatus::Canceled),
            "past_due" => Ok(SubscriptionStatus::PastDue),
            "trialing" => Ok(SubscriptionStatus::Trialing),
            "incomplete" => Ok(SubscriptionStatus::Incomplete),
            other => Err(AppError::ValidationError(format!(
                "알 수 없는 구독 상태: {}",
                other
            ))),
        }
    }
}

/// 구독 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub stripe_customer_id: String,
    pub stripe_subscription_id: String,
    pub plan: String,
    /// 저장된 등급 문자열
    pub tier: String,
    /// 저장된 상태 문자열
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    /// 최초 취소 시각 (한 번 기록되면 변경되지 않음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn create(request: SubscriptionCreateRequest, now: DateTime<Utc>) -> AppResult<Self> {
        request.validate()?;

        let canceled_at = (request.status == SubscriptionStatus::Canceled).then_some(now);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            stripe_customer_id: request.stripe_customer_id,
            stripe_subscription_id: request.stripe_subscription_id,
            plan: request.plan,
            tier: request.tier.as_str().to_string(),
            status: request.status.as_str().to_string(),
            started_at: request.started_at.unwrap_or(now),
            current_period_start: request.current_period_start,
            current_period_end: request.current_period_end,
            canceled_at,
            trial_ends_at: request.trial_ends_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// 저장된 등급을 열거형으로 해석합니다.
    pub fn parsed_tier(&self) -> AppResult<SubscriptionTier> {
        self.tier.parse()
    }

    /// 저장된 상태를 열거형으로 해석합니다.
    pub fn parsed_status(&self) -> AppResult<SubscriptionStatus> {
        self.status.parse()
    }

    /// 현재 서비스 이용이 가능한 구독인지 확인 (`active` 또는 `trialing`)
    ///
    /// 저장된 상태가 알 수 없는 값이면 비활성으로 취급합니다.
    pub fn is_active(&self) -> bool {
        self.parsed_status()
            .map(|status| status.grants_access())
            .unwrap_or(false)
    }

    pub fn is_canceled(&self) -> bool {
        self.status == SubscriptionStatus::Canceled.as_str()
    }

    /// 구독을 취소합니다. 상태를 `canceled`로 바꾸는 병합과 같습니다.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> AppResult<bool> {
        self.apply_update_at(
            SubscriptionUpdateRequest {
                status: Some(SubscriptionStatus::Canceled),
                ..Default::default()
            },
            now,
        )
    }
}

impl ApplyUpdate<SubscriptionUpdateRequest> for Subscription {
    /// `has_active_subscription`은 사용자 레코드 전용 필드이므로 여기서는 무시됩니다.
    fn apply_update_at(
        &mut self,
        request: SubscriptionUpdateRequest,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        request.validate()?;

        if !request.touches_subscription() {
            return Ok(false);
        }

        let period_start = request
            .current_period_start
            .unwrap_or(self.current_period_start);
        let period_end = request.current_period_end.unwrap_or(self.current_period_end);
        if period_start > period_end {
            return Err(AppError::ValidationError(
                "current_period_start: 기간 시작은 기간 종료보다 늦을 수 없습니다".to_string(),
            ));
        }

        let SubscriptionUpdateRequest {
            status,
            tier,
            plan,
            stripe_customer_id,
            canceled_at,
            trial_ends_at,
            ..
        } = request;

        if let Some(status) = status {
            self.status = status.as_str().to_string();
            if status == SubscriptionStatus::Canceled && self.canceled_at.is_none() {
                self.canceled_at = Some(canceled_at.unwrap_or(now));
            }
        }
        if let Some(canceled_at) = canceled_at {
            self.canceled_at.get_or_insert(canceled_at);
        }
        if let Some(tier) = tier {
            self.tier = tier.as_str().to_string();
        }
        if let Some(plan) = plan {
            self.plan = plan;
        }
        if let Some(customer_id) = stripe_customer_id {
            self.stripe_customer_id = customer_id;
        }
        if let Some(trial_ends_at) = trial_ends_at {
            self.trial_ends_at = Some(trial_ends_at);
        }
        self.current_period_start = period_start;
        self.current_period_end = period_end;

        self.updated_at = now;
        log::debug!("구독 정보 수정 적용: {} (status={})", self.id, self.status);
        Ok(true)
    }
}
