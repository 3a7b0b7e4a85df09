//! 인증/이메일 서비스 클라이언트 계약

use async_trait::async_trait;

use crate::domain::dto::auth::{
    AuthResponse, ChangePasswordRequest, EmailVerificationSendRequest, ForgotPasswordRequest,
    GoogleOAuthRequest, GoogleOAuthResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest, ResetPasswordRequest,
};
use crate::domain::dto::common::HealthResponse;
use crate::domain::dto::subscriptions::SubscriptionResponse;
use crate::domain::models::SessionInfo;
use crate::errors::AppResult;

#[async_trait]
pub trait AuthServiceClient: Send + Sync {
    async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse>;
    async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse>;
    async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<AuthResponse>;
    async fn logout(&self, request: LogoutRequest) -> AppResult<()>;

    // Google OAuth
    async fn google_oauth(&self, request: GoogleOAuthRequest) -> AppResult<GoogleOAuthResponse>;
    /// 동의 화면 URL
    async fn get_google_oauth_url(&self, state: &str) -> AppResult<String>;

    // 비밀번호 관리
    async fn forgot_password(&self, request: ForgotPasswordRequest) -> AppResult<()>;
    async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<()>;
    async fn change_password(&self, user_id: &str, request: ChangePasswordRequest)
    -> AppResult<()>;

    // 토큰 검증과 세션
    async fn validate_token(&self, token: &str) -> AppResult<SessionInfo>;
    async fn get_session_info(&self, token: &str) -> AppResult<SessionInfo>;

    async fn send_email_verification(&self, request: EmailVerificationSendRequest)
    -> AppResult<()>;

    async fn health(&self) -> AppResult<HealthResponse>;
}

#[async_trait]
pub trait EmailServiceClient: Send + Sync {
    async fn send_verification_email(&self, user_id: &str, email: &str, token: &str)
    -> AppResult<()>;
    async fn send_welcome_email(&self, user_id: &str, email: &str, name: &str) -> AppResult<()>;
    async fn send_password_reset_email(
        &self,
        user_id: &str,
        email: &str,
        token: &str,
    ) -> AppResult<()>;
    async fn send_subscription_confirmation_email(
        &self,
        user_id: &str,
        email: &str,
        subscription: &SubscriptionResponse,
    ) -> AppResult<()>;
    async fn send_subscription_cancelation_email(&self, user_id: &str, email: &str)
    -> AppResult<()>;

    async fn health(&self) -> AppResult<HealthResponse>;
}
