//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 레코드를 클라이언트에게 안전한 형태로 투영한 응답 구조를 정의합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시, Google ID, Stripe 식별자, 인증 토큰은 응답에서 제외
//! - **독립 값**: 투영 결과는 원본 엔티티와 가변 상태를 공유하지 않는 새 값
//! - **일관성**: 목록 응답은 모두 `page`, `limit`, `total`, `total_pages`를 포함
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "3f2c...",
//!   "email": "a@x.com",
//!   "role": "user",
//!   "email_verified": false,
//!   "has_active_subscription": false,
//!   "created_at": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{AuthenticateResponse, UserListResponse, UserResponse, VerifyEmailResponse};
