//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 서비스로 들어오는 요청 데이터 구조를 정의합니다.
//! `serde`로 JSON을 역직렬화하고 `validator`로 필드 규칙을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (닫힌 열거형 포함)
//! 2. **형식 검증**: 이메일, 길이 등 필드별 규칙
//! 3. **병합 검증**: 엔티티와 합쳐진 결과에 대한 규칙 (엔티티 계층에서 수행)
//!
//! 검증 실패 시 `validator::ValidationErrors`는 `AppError::ValidationError`로 변환됩니다.

pub mod auth_request;
pub mod create_user;
pub mod list_users;
pub mod update_user;

pub use auth_request::{AuthenticateRequest, VerifyEmailRequest};
pub use create_user::UserCreateRequest;
pub use list_users::UserListQuery;
pub use update_user::{
    EmailVerificationRequest, GoogleLinkRequest, PasswordUpdateRequest, UserUpdateRequest,
};
