//! 전화 서비스 클라이언트 계약
//!
//! 전체 수명주기 API([`PhoneServiceClient`])와 단순 구매 API([`PhoneProviderServiceClient`])는
//! 서로 독립된 기능 집합입니다. 어느 한쪽이 다른 쪽을 대체하지 않습니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::dto::common::HealthResponse;
use crate::domain::dto::phones::{
    PhoneNumberResponse, PhoneProvisionRequest, PhoneProvisionResponse, PhoneUsageAnalytics,
    PhoneUsageResponse, PurchasePhoneNumberRequest, PurchasePhoneNumberResponse,
};
use crate::domain::entities::Metadata;
use crate::domain::models::TwilioWebhookData;
use crate::errors::AppResult;

#[async_trait]
pub trait PhoneServiceClient: Send + Sync {
    // 번호 관리
    async fn provision_phone_number(
        &self,
        request: PhoneProvisionRequest,
    ) -> AppResult<PhoneProvisionResponse>;
    async fn release_phone_number(&self, phone_number_id: Uuid) -> AppResult<()>;
    async fn get_user_phone_numbers(&self, user_id: &str) -> AppResult<Vec<PhoneNumberResponse>>;
    async fn get_phone_number_usage(
        &self,
        phone_number_id: Uuid,
    ) -> AppResult<Vec<PhoneUsageResponse>>;

    // 번호 설정
    async fn update_phone_number_configuration(
        &self,
        phone_number_id: Uuid,
        configuration: Metadata,
    ) -> AppResult<()>;
    async fn suspend_phone_number(&self, phone_number_id: Uuid) -> AppResult<()>;
    async fn reactivate_phone_number(&self, phone_number_id: Uuid) -> AppResult<()>;

    /// `[from, to)` 기간의 사용량 집계
    async fn get_phone_number_analytics(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<PhoneUsageAnalytics>;

    async fn get_service_health(&self) -> AppResult<HealthResponse>;
}

#[async_trait]
pub trait PhoneProviderServiceClient: Send + Sync {
    async fn purchase_phone_number(
        &self,
        request: PurchasePhoneNumberRequest,
    ) -> AppResult<PurchasePhoneNumberResponse>;

    async fn get_service_health(&self) -> AppResult<HealthResponse>;
}

/// Twilio 웹훅 처리기
#[async_trait]
pub trait PhoneWebhookHandler: Send + Sync {
    async fn handle_voice_webhook(&self, data: TwilioWebhookData) -> AppResult<()>;
    async fn handle_sms_webhook(&self, data: TwilioWebhookData) -> AppResult<()>;
    async fn handle_status_webhook(&self, data: TwilioWebhookData) -> AppResult<()>;
}
