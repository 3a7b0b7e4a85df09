//! # Data Transfer Objects (DTO) Module
//!
//! 서비스 경계에서 JSON으로 주고받는 요청/응답 구조를 정의하는 모듈입니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 데이터 은닉
//! - 응답 DTO는 엔티티의 내부 전용 필드를 절대 포함하지 않습니다.
//! - 5xx 오류는 내부 메시지 대신 일반 메시지로 내려갑니다.
//!
//! ### 2. 부분 수정
//! - 모든 `*UpdateRequest` 필드는 `Option<T>`이며 `#[serde(default)]`를 가집니다.
//! - 필드가 없거나 `null`이면 "변경 없음"이고, "값 지우기"가 아닙니다.
//!
//! ### 3. 검증 내장
//! - `validator` derive로 필드 규칙을 선언하고, 실패는 `AppError::ValidationError`로 변환됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/          # ApiResponse 봉투, Meta/Pagination, HealthResponse
//! ├── users/           # 사용자 서비스
//! ├── organizations/   # 조직 서비스
//! ├── subscriptions/   # 구독 서비스 (Stripe Checkout 포함)
//! ├── phones/          # 전화 서비스 (발급, 구매, 사용량 집계)
//! └── auth/            # 인증 서비스
//! ```

pub mod auth;
pub mod common;
pub mod organizations;
pub mod phones;
pub mod subscriptions;
pub mod users;
