//! # 사용자 생성 요청 DTO
//!
//! 사용자 서비스에 새 사용자 레코드를 만들 때 사용하는 요청입니다.
//! 비밀번호 해싱은 인증 서비스가 이미 수행했으므로 이 요청은 해시 값만 전달합니다.
//!
//! ## 검증 규칙
//!
//! - `email`: RFC 5322 이메일 형식
//! - `password_hash`: 값이 있으면 비어 있을 수 없음
//! - `role`: 값이 있으면 1-50자, 없으면 `"user"`
//! - `verification_token`: 값이 있으면 비어 있을 수 없음
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "a@x.com",
//!   "password_hash": "$2b$12$...",
//!   "role": "user",
//!   "org_id": "6f1c0b3e-2d53-4c1a-9a57-6f0e8c1d2b3a"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 새 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserCreateRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 인증 서비스가 계산한 비밀번호 해시 (OAuth 전용 계정은 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "비밀번호 해시는 비어 있을 수 없습니다"))]
    pub password_hash: Option<String>,

    /// 사용자 역할 (기본값: `"user"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "역할은 1-50자 사이여야 합니다"))]
    pub role: Option<String>,

    /// 소속 조직
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,

    /// 이메일 인증 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "인증 토큰은 비어 있을 수 없습니다"))]
    pub verification_token: Option<String>,

    /// 인증 토큰 만료 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
}
