//! 페이지네이션 설정 관리 모듈
//!
//! 목록 조회 응답의 기본 페이지 크기와 최대 페이지 크기를 관리합니다.
//! 설정되지 않았거나 잘못된 환경 변수는 기본값으로 대체됩니다.

use std::env;

/// 페이지 번호 기본값
pub const DEFAULT_PAGE: u32 = 1;

/// 페이지 크기 기본값
pub const DEFAULT_LIMIT: u32 = 20;

/// 페이지 크기 상한
pub const MAX_LIMIT: u32 = 100;

/// 페이지네이션 설정
///
/// # Environment Variables
///
/// - `PAGINATION_DEFAULT_LIMIT`: 요청에 limit이 없을 때 사용할 페이지 크기 (기본값: 20)
/// - `PAGINATION_MAX_LIMIT`: 허용되는 최대 페이지 크기 (기본값: 100)
///
/// # Examples
///
/// ```rust,ignore
/// use atlas_shared::config::PaginationConfig;
///
/// let config = PaginationConfig::from_env();
/// let pagination = Pagination::with_config(query.page, query.limit, &config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// 환경 변수에서 페이지네이션 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    ///
    /// 기본 페이지 크기가 최대값보다 크면 최대값으로 낮춥니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_limit = parse_positive(&lookup, "PAGINATION_MAX_LIMIT", MAX_LIMIT);
        let default_limit = parse_positive(&lookup, "PAGINATION_DEFAULT_LIMIT", DEFAULT_LIMIT);

        if default_limit > max_limit {
            log::warn!(
                "PAGINATION_DEFAULT_LIMIT({})가 PAGINATION_MAX_LIMIT({})보다 큽니다. 최대값 사용",
                default_limit,
                max_limit
            );
        }

        Self {
            default_limit: default_limit.min(max_limit),
            max_limit,
        }
    }
}

fn parse_positive<F>(lookup: &F, name: &str, fallback: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => fallback,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => value,
            Ok(_) => {
                log::error!("{}는 0보다 커야 합니다. 기본값 {} 사용", name, fallback);
                fallback
            }
            Err(e) => {
                log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, fallback);
                fallback
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PaginationConfig::from_lookup(|_| None);
        assert_eq!(config, PaginationConfig::default());
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_limit, 100);
    }

    #[test]
    fn test_custom_values() {
        let config = PaginationConfig::from_lookup(lookup_from(&[
            ("PAGINATION_DEFAULT_LIMIT", "50"),
            ("PAGINATION_MAX_LIMIT", "500"),
        ]));
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.max_limit, 500);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = PaginationConfig::from_lookup(lookup_from(&[
            ("PAGINATION_DEFAULT_LIMIT", "abc"),
            ("PAGINATION_MAX_LIMIT", "0"),
        ]));
        assert_eq!(config, PaginationConfig::default());
    }

    #[test]
    fn test_default_limit_capped_by_max() {
        let config = PaginationConfig::from_lookup(lookup_from(&[
            ("PAGINATION_DEFAULT_LIMIT", "80"),
            ("PAGINATION_MAX_LIMIT", "30"),
        ]));
        assert_eq!(config.default_limit, 30);
        assert_eq!(config.max_limit, 30);
    }
}
