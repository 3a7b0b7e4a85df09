//! 구독 서비스 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{
    CheckoutSessionRequest, SubscriptionCreateRequest, SubscriptionListQuery,
    SubscriptionUpdateRequest,
};
pub use response::{
    CheckoutSessionResponse, SubscriptionListResponse, SubscriptionResponse,
    UserSubscriptionResponse,
};
