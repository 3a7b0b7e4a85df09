//! 인증 서비스 응답 DTO

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::UserResponse;

/// 토큰 타입 기본값
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// 발급된 토큰 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthTokens {
    /// Bearer 토큰 쌍을 만들고 만료 시각을 계산합니다.
    pub fn bearer(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            expires_in,
            expires_at: Some(issued_at + Duration::seconds(expires_in)),
        }
    }
}

/// 로그인/회원가입/갱신 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: AuthTokens,
    pub user: UserResponse,
}

/// Google OAuth 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleOAuthResponse {
    #[serde(flatten)]
    pub auth: AuthResponse,
    /// 이번 로그인으로 계정이 새로 만들어졌는지 여부
    pub is_new_user: bool,
}

/// 인증 전용 오류 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorCode {
    InvalidCredentials,
    UserNotFound,
    UserAlreadyExists,
    InvalidToken,
    TokenExpired,
    EmailNotVerified,
    AccountLocked,
    InvalidGoogleCode,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::InvalidCredentials => "invalid_credentials",
            AuthErrorCode::UserNotFound => "user_not_found",
            AuthErrorCode::UserAlreadyExists => "user_already_exists",
            AuthErrorCode::InvalidToken => "invalid_token",
            AuthErrorCode::TokenExpired => "token_expired",
            AuthErrorCode::EmailNotVerified => "email_not_verified",
            AuthErrorCode::AccountLocked => "account_locked",
            AuthErrorCode::InvalidGoogleCode => "invalid_google_code",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 인증 오류 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
