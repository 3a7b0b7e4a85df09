//! 사용자 서비스 인증 요청 DTO
//!
//! 인증 서비스가 사용자 서비스에 자격 증명 확인과 이메일 인증을 요청할 때 사용합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 자격 증명 확인 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 이메일 인증 토큰 확인 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(length(min = 1, message = "인증 토큰이 필요합니다"))]
    pub token: String,
}
