//! # 사용자 수정 요청 DTO
//!
//! 사용자 레코드에 대한 부분 업데이트 요청들입니다.
//! 모든 필드는 선택 사항이며, 필드가 없거나 `null`이면 기존 값을 유지합니다.
//!
//! ```json
//! { "role": "admin" }
//! ```
//!
//! 위 요청은 `role`만 바꾸고 `email`, `org_id`는 그대로 둡니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 사용자 기본 정보 수정 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "역할은 1-50자 사이여야 합니다"))]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,
}

impl UserUpdateRequest {
    /// 적용할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.role.is_none() && self.org_id.is_none()
    }
}

/// 이메일 인증 상태 수정 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmailVerificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "인증 토큰은 비어 있을 수 없습니다"))]
    pub verification_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
}

impl EmailVerificationRequest {
    pub fn is_empty(&self) -> bool {
        self.email_verified.is_none()
            && self.verification_token.is_none()
            && self.token_expires_at.is_none()
    }
}

/// 비밀번호 해시 교체 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PasswordUpdateRequest {
    #[validate(length(min = 1, message = "비밀번호 해시가 필요합니다"))]
    pub password_hash: String,
}

/// Google 계정 연결 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GoogleLinkRequest {
    #[validate(length(min = 1, message = "Google ID가 필요합니다"))]
    pub google_id: String,
}
