//! 사용자 목록 조회 쿼리

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::domain::dto::common::Pagination;
use crate::domain::entities::User;

/// 사용자 목록 조회 조건
///
/// `page`/`limit`이 0 이하이면 기본값이 적용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserListQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
}

impl UserListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn pagination_with(&self, config: &PaginationConfig) -> Pagination {
        Pagination::with_config(self.page, self.limit, config)
    }

    /// 필터 조건에 맞는 사용자인지 확인 (삭제된 사용자는 제외)
    pub fn matches(&self, user: &User) -> bool {
        !user.is_deleted()
            && self
                .role
                .as_ref()
                .is_none_or(|role| &user.role == role)
            && self.org_id.is_none_or(|org_id| user.org_id == Some(org_id))
            && self
                .email_verified
                .is_none_or(|verified| user.email_verified == verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::UserCreateRequest;
    use chrono::Utc;

    fn user(role: &str) -> User {
        User::create(
            UserCreateRequest {
                email: "a@x.com".to_string(),
                role: Some(role.to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_matches_filters_by_role_and_verification() {
        let admin = user("admin");

        assert!(UserListQuery::default().matches(&admin));

        let query = UserListQuery {
            role: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&admin));
        assert!(!query.matches(&user("user")));

        let query = UserListQuery {
            email_verified: Some(true),
            ..Default::default()
        };
        assert!(!query.matches(&admin));
    }

    #[test]
    fn test_deleted_user_never_matches() {
        let mut deleted = user("user");
        deleted.mark_deleted(Utc::now());

        assert!(!UserListQuery::default().matches(&deleted));
    }
}
