use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::common::{Meta, Pagination};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시, Google ID, Stripe 식별자, 이메일 인증 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,
    pub email_verified: bool,
    pub has_active_subscription: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            org_id: user.org_id,
            email_verified: user.email_verified,
            has_active_subscription: user.has_active_subscription,
            subscription_tier: user.subscription_tier.clone(),
            subscription_status: user.subscription_status.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            role,
            org_id,
            email_verified,
            has_active_subscription,
            subscription_tier,
            subscription_status,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            role,
            org_id,
            email_verified,
            has_active_subscription,
            subscription_tier,
            subscription_status,
            created_at,
        }
    }
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl UserListResponse {
    pub fn new(users: Vec<UserResponse>, pagination: &Pagination, total: u64) -> Self {
        Self {
            users,
            meta: pagination.meta(total),
        }
    }
}

/// 자격 증명 확인 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub user: UserResponse,
}

/// 이메일 인증 완료 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    pub message: String,
    pub user: UserResponse,
}

impl VerifyEmailResponse {
    pub fn new(user: &User) -> Self {
        Self {
            message: "이메일 인증이 완료되었습니다".to_string(),
            user: UserResponse::from(user),
        }
    }
}
