//! 저장된 리프레시 토큰

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 인증 서비스가 보관하는 리프레시 토큰 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// 폐기되지 않았고 만료 전이면 사용 가능
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    /// 토큰을 폐기합니다. 이미 폐기된 경우 최초 폐기 시각을 유지합니다.
    pub fn revoke(&mut self, now: DateTime<Utc>) -> bool {
        if self.revoked_at.is_some() {
            return false;
        }

        self.revoked_at = Some(now);
        self.updated_at = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_active_until_revoked_or_expired() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let mut token = RefreshToken {
            id: "rt1".to_string(),
            user_id: "u1".to_string(),
            token: "opaque".to_string(),
            expires_at: now + Duration::days(7),
            created_at: now,
            updated_at: now,
            revoked_at: None,
        };

        assert!(token.is_active(now));
        assert!(!token.is_active(now + Duration::days(7)));

        assert!(token.revoke(now + Duration::hours(1)));
        assert!(!token.revoke(now + Duration::hours(2)));
        assert_eq!(token.revoked_at, Some(now + Duration::hours(1)));
        assert!(!token.is_active(now + Duration::hours(3)));
    }
}
