//! 인증 서비스 요청 DTO
//!
//! 평문 비밀번호를 담는 요청들입니다. 비밀번호 검증과 해싱은 인증 서비스의 몫이며,
//! 여기서는 필드 형식만 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 토큰 갱신 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// Google OAuth 콜백 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoogleOAuthRequest {
    #[validate(length(min = 1, message = "인증 코드가 필요합니다"))]
    pub code: String,

    /// CSRF 방지용 state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// 로그아웃 요청 (리프레시 토큰이 주어지면 함께 폐기)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LogoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// 비밀번호 재설정 메일 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "재설정 토큰이 필요합니다"))]
    pub token: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}

/// 비밀번호 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub current_password: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}

/// 이메일 인증 메일 발송 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailVerificationSendRequest {
    #[validate(length(min = 1, message = "사용자 ID가 필요합니다"))]
    pub user_id: String,
}
