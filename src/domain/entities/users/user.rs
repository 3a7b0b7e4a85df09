//! User Entity Implementation
//!
//! 사용자 서비스가 소유하는 사용자 레코드입니다.
//! 로컬 인증(비밀번호 해시)과 Google OAuth 연결, Stripe 구독 상태를 함께 보관합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::subscriptions::SubscriptionUpdateRequest;
use crate::domain::dto::users::{
    EmailVerificationRequest, GoogleLinkRequest, PasswordUpdateRequest, UserCreateRequest,
    UserUpdateRequest,
};
use crate::domain::entities::ApplyUpdate;
use crate::domain::entities::subscriptions::SubscriptionStatus;
use crate::errors::{AppError, AppResult};

/// 역할이 지정되지 않은 사용자의 기본 역할
pub const DEFAULT_ROLE: &str = "user";

/// 사용자 엔티티
///
/// 내부 전용 필드(`password_hash`, `google_id`, `stripe_customer_id`,
/// `stripe_subscription_id`, `verification_token`, `token_expires_at`)는
/// 서비스 내부에서만 사용되며 [`UserResponse`](crate::domain::dto::users::UserResponse)로
/// 투영될 때 제거됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (OAuth 전용 사용자의 경우 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 연결된 Google 계정 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,
    pub email_verified: bool,
    pub has_active_subscription: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    /// 이메일 인증 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
    /// 생성 시간 (생성 후 변경 불가)
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
    /// 소프트 삭제 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// 생성 요청으로부터 새 사용자를 만듭니다.
    ///
    /// 식별자는 UUID v4 문자열로 발급되며, 이메일 인증이 필요한 상태로 시작합니다.
    pub fn create(request: UserCreateRequest, now: DateTime<Utc>) -> AppResult<Self> {
        request.validate()?;

        let UserCreateRequest {
            email,
            password_hash,
            role,
            org_id,
            verification_token,
            token_expires_at,
        } = request;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            google_id: None,
            role: role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            org_id,
            email_verified: false,
            has_active_subscription: false,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            subscription_tier: None,
            subscription_status: None,
            verification_token,
            token_expires_at,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Google 계정이 연결되어 있는지 확인
    pub fn is_google_linked(&self) -> bool {
        self.google_id.is_some()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// 주어진 토큰이 만료되지 않은 이메일 인증 토큰과 일치하는지 확인
    pub fn matches_verification_token(&self, token: &str, now: DateTime<Utc>) -> bool {
        let token_matches = self.verification_token.as_deref() == Some(token);
        let not_expired = self.token_expires_at.is_none_or(|expires_at| now < expires_at);

        token_matches && not_expired
    }

    /// 이메일 인증을 완료하고 사용한 토큰을 폐기합니다.
    pub fn verify_email(&mut self, now: DateTime<Utc>) {
        self.email_verified = true;
        self.verification_token = None;
        self.token_expires_at = None;
        self.updated_at = now;
    }

    /// 비밀번호 해시를 교체합니다.
    pub fn set_password_hash(
        &mut self,
        request: PasswordUpdateRequest,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        request.validate()?;

        self.password_hash = Some(request.password_hash);
        self.updated_at = now;
        Ok(())
    }

    /// Google 계정을 연결합니다.
    ///
    /// 이미 다른 Google 계정이 연결되어 있으면 `ConflictError`를 반환합니다.
    pub fn link_google_account(
        &mut self,
        request: GoogleLinkRequest,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        request.validate()?;

        match self.google_id.as_deref() {
            Some(existing) if existing == request.google_id => Ok(()),
            Some(_) => Err(AppError::ConflictError(
                "이미 다른 Google 계정이 연결되어 있습니다".to_string(),
            )),
            None => {
                self.google_id = Some(request.google_id);
                self.updated_at = now;
                Ok(())
            }
        }
    }

    /// 사용자 관점의 구독 상태를 취소로 전환합니다.
    pub fn cancel_subscription(&mut self, now: DateTime<Utc>) {
        self.has_active_subscription = false;
        self.subscription_status = Some(SubscriptionStatus::Canceled.as_str().to_string());
        self.updated_at = now;
    }

    /// 소프트 삭제합니다. 이미 삭제된 경우 최초 삭제 시각을 유지하고 `false`를 반환합니다.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_deleted() {
            return false;
        }

        self.deleted_at = Some(now);
        self.updated_at = now;
        true
    }
}

impl ApplyUpdate<UserUpdateRequest> for User {
    fn apply_update_at(&mut self, request: UserUpdateRequest, now: DateTime<Utc>) -> AppResult<bool> {
        request.validate()?;

        if request.is_empty() {
            return Ok(false);
        }

        let UserUpdateRequest {
            email,
            role,
            org_id,
        } = request;

        if let Some(email) = email {
            self.email = email;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(org_id) = org_id {
            self.org_id = Some(org_id);
        }

        self.updated_at = now;
        log::debug!("사용자 정보 수정 적용: {}", self.id);
        Ok(true)
    }
}

impl ApplyUpdate<EmailVerificationRequest> for User {
    fn apply_update_at(
        &mut self,
        request: EmailVerificationRequest,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        request.validate()?;

        if request.is_empty() {
            return Ok(false);
        }

        if let Some(verified) = request.email_verified {
            self.email_verified = verified;
        }
        if let Some(token) = request.verification_token {
            self.verification_token = Some(token);
        }
        if let Some(expires_at) = request.token_expires_at {
            self.token_expires_at = Some(expires_at);
        }

        self.updated_at = now;
        Ok(true)
    }
}

impl ApplyUpdate<SubscriptionUpdateRequest> for User {
    /// 사용자 레코드에 미러링되는 구독 필드만 적용합니다.
    ///
    /// `tier`, `status`, `stripe_customer_id`, `has_active_subscription` 외의 필드는
    /// 구독 레코드 전용이므로 여기서는 무시됩니다.
    fn apply_update_at(
        &mut self,
        request: SubscriptionUpdateRequest,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        request.validate()?;

        let applicable = request.tier.is_some()
            || request.status.is_some()
            || request.stripe_customer_id.is_some()
            || request.has_active_subscription.is_some();
        if !applicable {
            return Ok(false);
        }

        if let Some(tier) = request.tier {
            self.subscription_tier = Some(tier.as_str().to_string());
        }
        if let Some(status) = request.status {
            self.subscription_status = Some(status.as_str().to_string());
        }
        if let Some(customer_id) = request.stripe_customer_id {
            self.stripe_customer_id = Some(customer_id);
        }
        if let Some(active) = request.has_active_subscription {
            self.has_active_subscription = active;
        }

        self.updated_at = now;
        Ok(true)
    }
}
