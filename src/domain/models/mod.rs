//! # Domain Models Module
//!
//! 영속 엔티티가 아닌 도메인 값 객체를 정의하는 모듈입니다.
//!
//! ### Entities (`../entities/`)
//! - 서비스가 소유하고 저장하는 레코드
//! - 응답 DTO로 투영되고, 수정 요청으로 병합됨
//!
//! ### Models (`./`)
//! - [`auth`]: 검증이 끝난 토큰 클레임, 세션 정보, 리프레시 토큰
//! - [`webhooks`]: Stripe/Twilio 웹훅 페이로드 (해석하지 않고 전달만)

pub mod auth;
pub mod webhooks;

pub use auth::{RefreshToken, SessionInfo, TokenClaims, TokenType};
pub use webhooks::{StripeWebhookEvent, TwilioWebhookData};
