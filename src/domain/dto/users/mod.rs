//! # User Data Transfer Objects Module
//!
//! 사용자 서비스 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                 # 호출자 → 사용자 서비스
//! │   ├── create_user.rs      # UserCreateRequest
//! │   ├── update_user.rs      # UserUpdateRequest, EmailVerificationRequest, ...
//! │   ├── auth_request.rs     # AuthenticateRequest, VerifyEmailRequest
//! │   └── list_users.rs       # UserListQuery
//! └── response/                # 사용자 서비스 → 호출자
//!     └── user_response.rs    # UserResponse, UserListResponse, ...
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
