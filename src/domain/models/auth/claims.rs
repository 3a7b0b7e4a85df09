//! JWT 클레임과 세션 정보
//!
//! 토큰 서명과 검증은 인증 서비스가 수행합니다. 이 모듈은 검증이 끝난 클레임의
//! 형태와 세션 정보로의 변환만 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `user_id`: 사용자 ID
/// - `email`: 사용자 이메일
/// - `role`: 사용자 역할
/// - `token_type`: `access` 또는 `refresh`
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub token_type: TokenType,
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(rename = "iat")]
    pub issued_at: i64,
}

impl TokenClaims {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }

    /// 액세스 토큰 클레임을 세션 정보로 변환합니다.
    pub fn session_info(&self, now: DateTime<Utc>) -> AppResult<SessionInfo> {
        if self.token_type != TokenType::Access {
            return Err(AppError::AuthenticationError(
                "액세스 토큰이 아닙니다".to_string(),
            ));
        }
        if self.is_expired_at(now) {
            return Err(AppError::AuthenticationError("토큰이 만료되었습니다".to_string()));
        }

        let issued_at = DateTime::from_timestamp(self.issued_at, 0)
            .ok_or_else(|| AppError::AuthenticationError("잘못된 발급 시간".to_string()))?;
        let expires_at = DateTime::from_timestamp(self.expires_at, 0)
            .ok_or_else(|| AppError::AuthenticationError("잘못된 만료 시간".to_string()))?;

        Ok(SessionInfo {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            issued_at,
            expires_at,
        })
    }
}

/// 현재 세션 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claims(token_type: TokenType) -> TokenClaims {
        TokenClaims {
            user_id: "u1".to_string(),
            email: "a@x.com".to_string(),
            role: "admin".to_string(),
            token_type,
            expires_at: 1_700_003_600,
            issued_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_claims_wire_names() {
        let json = serde_json::to_value(claims(TokenType::Access)).unwrap();
        assert_eq!(json["exp"], 1_700_003_600i64);
        assert_eq!(json["iat"], 1_700_000_000i64);
        assert_eq!(json["token_type"], "access");
    }

    #[test]
    fn test_session_info_from_access_token() {
        let now = Utc.timestamp_opt(1_700_000_100, 0).unwrap();
        let session = claims(TokenType::Access).session_info(now).unwrap();

        assert!(session.is_admin());
        assert_eq!(session.expires_at.timestamp(), 1_700_003_600);
    }

    #[test]
    fn test_session_info_rejects_refresh_and_expired() {
        let now = Utc.timestamp_opt(1_700_000_100, 0).unwrap();
        assert!(matches!(
            claims(TokenType::Refresh).session_info(now),
            Err(AppError::AuthenticationError(_))
        ));

        let later = Utc.timestamp_opt(1_700_003_600, 0).unwrap();
        assert!(claims(TokenType::Access).session_info(later).is_err());
    }
}
