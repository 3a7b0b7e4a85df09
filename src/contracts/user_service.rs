//! 사용자 서비스 클라이언트 계약

use async_trait::async_trait;

use crate::domain::dto::common::HealthResponse;
use crate::domain::dto::subscriptions::{SubscriptionUpdateRequest, UserSubscriptionResponse};
use crate::domain::dto::users::{
    AuthenticateRequest, AuthenticateResponse, EmailVerificationRequest, GoogleLinkRequest,
    PasswordUpdateRequest, UserCreateRequest, UserListQuery, UserListResponse, UserResponse,
    UserUpdateRequest, VerifyEmailRequest, VerifyEmailResponse,
};
use crate::errors::AppResult;

/// 사용자 서비스가 호출자에게 제공하는 원격 연산
///
/// 모든 조회/수정 연산은 내부 레코드가 아닌 [`UserResponse`] 투영을 돌려줍니다.
#[async_trait]
pub trait UserServiceClient: Send + Sync {
    // 사용자 CRUD
    async fn create_user(&self, request: UserCreateRequest) -> AppResult<UserResponse>;
    async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse>;
    async fn get_user_by_email(&self, email: &str) -> AppResult<UserResponse>;
    async fn get_user_by_google_id(&self, google_id: &str) -> AppResult<UserResponse>;
    async fn update_user(&self, id: &str, request: UserUpdateRequest) -> AppResult<UserResponse>;
    async fn delete_user(&self, id: &str) -> AppResult<()>;
    async fn list_users(&self, query: UserListQuery) -> AppResult<UserListResponse>;

    // 이메일 인증
    async fn update_email_verification(
        &self,
        id: &str,
        request: EmailVerificationRequest,
    ) -> AppResult<UserResponse>;
    async fn verify_email(&self, request: VerifyEmailRequest) -> AppResult<VerifyEmailResponse>;
    async fn resend_verification(&self, id: &str) -> AppResult<()>;

    /// 이메일/비밀번호 자격 증명 확인
    async fn authenticate_user(
        &self,
        request: AuthenticateRequest,
    ) -> AppResult<AuthenticateResponse>;

    async fn link_google_account(
        &self,
        id: &str,
        request: GoogleLinkRequest,
    ) -> AppResult<UserResponse>;

    async fn update_password(
        &self,
        id: &str,
        request: PasswordUpdateRequest,
    ) -> AppResult<UserResponse>;

    // 구독 상태 미러
    async fn update_subscription(
        &self,
        id: &str,
        request: SubscriptionUpdateRequest,
    ) -> AppResult<UserResponse>;
    async fn get_subscription(&self, id: &str) -> AppResult<UserSubscriptionResponse>;
    async fn cancel_subscription(&self, id: &str) -> AppResult<UserResponse>;

    async fn user_exists(&self, email: &str) -> AppResult<bool>;

    async fn health(&self) -> AppResult<HealthResponse>;
}
