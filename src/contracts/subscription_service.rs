//! 구독 서비스 클라이언트 계약

use async_trait::async_trait;

use crate::domain::dto::common::HealthResponse;
use crate::domain::dto::subscriptions::{
    CheckoutSessionRequest, CheckoutSessionResponse, SubscriptionCreateRequest,
    SubscriptionResponse, SubscriptionUpdateRequest,
};
use crate::errors::AppResult;

#[async_trait]
pub trait SubscriptionServiceClient: Send + Sync {
    /// Stripe Checkout 세션 생성
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> AppResult<CheckoutSessionResponse>;

    async fn create_subscription(
        &self,
        request: SubscriptionCreateRequest,
    ) -> AppResult<SubscriptionResponse>;
    async fn get_subscription_by_stripe_id(
        &self,
        stripe_subscription_id: &str,
    ) -> AppResult<SubscriptionResponse>;
    async fn get_subscription_by_user_id(&self, user_id: &str) -> AppResult<SubscriptionResponse>;
    async fn update_subscription_by_stripe_id(
        &self,
        stripe_subscription_id: &str,
        request: SubscriptionUpdateRequest,
    ) -> AppResult<SubscriptionResponse>;
    async fn cancel_subscription(&self, subscription_id: &str) -> AppResult<SubscriptionResponse>;

    /// Stripe 웹훅 원문과 `Stripe-Signature` 헤더를 그대로 전달합니다.
    async fn handle_stripe_webhook(&self, payload: &[u8], signature: &str) -> AppResult<()>;

    async fn health(&self) -> AppResult<HealthResponse>;
}
