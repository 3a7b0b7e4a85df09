//! # Service Client Contracts
//!
//! 각 서비스가 호출자에게 제공하는 원격 연산을 `async` trait으로 선언합니다.
//! 이 크레이트는 trait을 구현하지 않습니다. 구현(HTTP 클라이언트, 서버 핸들러)은
//! 계약을 사용하는 각 서비스의 몫입니다.
//!
//! 모든 trait은 `Send + Sync`이며 `Arc<dyn Trait>`으로 태스크 간에 공유할 수 있습니다.
//!
//! | Trait | 서비스 |
//! |-------|--------|
//! | [`UserServiceClient`] | 사용자 |
//! | [`OrganizationServiceClient`] | 조직 |
//! | [`SubscriptionServiceClient`] | 구독 (Stripe) |
//! | [`AuthServiceClient`] | 인증 |
//! | [`EmailServiceClient`] | 이메일 |
//! | [`PhoneServiceClient`] | 전화 (전체 수명주기) |
//! | [`PhoneProviderServiceClient`] | 전화 (단순 구매) |
//! | [`PhoneWebhookHandler`] | Twilio 웹훅 |

pub mod auth_service;
pub mod organization_service;
pub mod phone_service;
pub mod subscription_service;
pub mod user_service;

pub use auth_service::{AuthServiceClient, EmailServiceClient};
pub use organization_service::OrganizationServiceClient;
pub use phone_service::{PhoneProviderServiceClient, PhoneServiceClient, PhoneWebhookHandler};
pub use subscription_service::SubscriptionServiceClient;
pub use user_service::UserServiceClient;
