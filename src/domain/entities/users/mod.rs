//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 하나의 사용자 레코드가 로컬 인증, Google OAuth 연결, 구독 상태를 모두 보관합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use atlas_shared::domain::entities::users::User;
//!
//! let user = User::create(request, Utc::now())?;
//! let response = UserResponse::from(&user);
//! ```

pub mod user;

pub use user::User;
