//! 페이지네이션 메타데이터 계산
//!
//! 목록 조회 요청의 `page`/`limit`을 정규화하고, 전체 건수로부터
//! 응답 봉투의 `meta` 값을 계산합니다. 실제 행 조회는 호출 측 쿼리 계층의 몫입니다.
//!
//! ## 정규화 규칙
//!
//! | 입력 | 결과 |
//! |------|------|
//! | `page <= 0` | `1` |
//! | `limit <= 0` | 기본 페이지 크기 (20) |
//! | `limit > 상한` | 상한 (100) |
//!
//! `total_pages = ceil(total / limit)` 이며 `total = 0`이면 0입니다.
//! 범위를 벗어난 페이지 요청은 에러가 아니며, 빈 목록과 올바른 메타데이터를 돌려줍니다.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PaginationConfig};

/// 정규화된 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Pagination {
    /// 기본 설정(기본 20, 상한 100)으로 정규화합니다.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atlas_shared::domain::dto::common::Pagination;
    ///
    /// let p = Pagination::new(0, 150);
    /// assert_eq!((p.page, p.limit), (1, 100));
    /// ```
    pub fn new(page: i64, limit: i64) -> Self {
        Self::with_config(page, limit, &PaginationConfig::default())
    }

    /// 주어진 설정으로 정규화합니다.
    ///
    /// 결과 `limit`은 항상 `[1, max_limit]` 범위입니다. 설정값이 0이면 기본 상수를 씁니다.
    pub fn with_config(page: i64, limit: i64, config: &PaginationConfig) -> Self {
        let page = if page <= 0 {
            DEFAULT_PAGE
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };

        let max_limit = match config.max_limit {
            0 => MAX_LIMIT,
            max => max,
        };
        let default_limit = match config.default_limit {
            0 => DEFAULT_LIMIT,
            default => default,
        };

        let limit = if limit <= 0 {
            default_limit
        } else {
            u32::try_from(limit).unwrap_or(u32::MAX)
        };

        Self {
            page,
            limit: limit.clamp(1, max_limit),
        }
    }

    /// 쿼리 계층에서 건너뛸 행 수
    ///
    /// 필드를 직접 채운 `page = 0`은 첫 페이지로 취급합니다.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// 전체 건수로부터 메타데이터를 계산합니다.
    pub fn meta(&self, total: u64) -> Meta {
        Meta::new(self, total)
    }
}

/// 페이지네이션 메타데이터
///
/// 응답 봉투의 `meta` 필드이자, 각 `*ListResponse`에 평탄화되어 포함됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Meta {
    pub fn new(pagination: &Pagination, total: u64) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: total.div_ceil(u64::from(pagination.limit.max(1))),
        }
    }

    /// 다음 페이지 존재 여부
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }

    /// 이전 페이지 존재 여부
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let meta = Pagination::new(1, 20).meta(95);
        assert_eq!(meta.total_pages, 5);

        let meta = Pagination::new(1, 20).meta(100);
        assert_eq!(meta.total_pages, 5);

        let meta = Pagination::new(1, 20).meta(101);
        assert_eq!(meta.total_pages, 6);
    }

    #[test]
    fn test_zero_total_has_zero_pages() {
        let meta = Pagination::new(1, 20).meta(0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next());
    }

    #[test]
    fn test_defaults_for_zero_and_negative() {
        assert_eq!(Pagination::new(0, 0), Pagination { page: 1, limit: 20 });
        assert_eq!(Pagination::new(-3, -10), Pagination { page: 1, limit: 20 });
        assert_eq!(Pagination::default(), Pagination { page: 1, limit: 20 });
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(Pagination::new(1, 150).limit, 100);
        assert_eq!(Pagination::new(1, 100).limit, 100);
        assert_eq!(Pagination::new(1, 1).limit, 1);
    }

    #[test]
    fn test_custom_config() {
        let config = PaginationConfig {
            default_limit: 10,
            max_limit: 50,
        };
        assert_eq!(Pagination::with_config(2, 0, &config).limit, 10);
        assert_eq!(Pagination::with_config(2, 75, &config).limit, 50);
    }

    #[test]
    fn test_zero_config_values_fall_back_to_defaults() {
        let config = PaginationConfig {
            default_limit: 0,
            max_limit: 0,
        };
        let pagination = Pagination::with_config(1, 50, &config);
        assert_eq!(pagination.limit, 50);
        assert_eq!(pagination.meta(10).total_pages, 1);

        let pagination = Pagination::with_config(1, 0, &config);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);

        let pagination = Pagination::with_config(1, 500, &config);
        assert_eq!(pagination.limit, MAX_LIMIT);
    }

    #[test]
    fn test_default_above_max_is_clamped() {
        let config = PaginationConfig {
            default_limit: 80,
            max_limit: 30,
        };
        assert_eq!(Pagination::with_config(1, 0, &config).limit, 30);
    }

    #[test]
    fn test_hand_built_zero_values_do_not_panic() {
        let pagination = Pagination { page: 0, limit: 20 };
        assert_eq!(pagination.offset(), 0);

        let meta = Pagination { page: 1, limit: 0 }.meta(10);
        assert_eq!(meta.total_pages, 10);
    }

    #[test]
    fn test_page_beyond_total_is_not_an_error() {
        let meta = Pagination::new(9, 20).meta(95);
        assert_eq!(meta.page, 9);
        assert_eq!(meta.total_pages, 5);
        assert!(!meta.has_next());
        assert!(meta.has_previous());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 20).offset(), 0);
        assert_eq!(Pagination::new(3, 20).offset(), 40);
    }

    #[test]
    fn test_meta_wire_format() {
        let meta = Pagination::new(2, 10).meta(35);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "page": 2, "limit": 10, "total": 35, "total_pages": 4 })
        );
    }
}
