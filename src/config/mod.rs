//! # Configuration Module
//!
//! 계약 라이브러리의 설정값을 관리하는 모듈입니다.
//! 서버 설정과 마찬가지로 환경 변수 기반이며, 잘못된 값은 안전한 기본값으로 대체됩니다.
//!
//! ## 모듈 구성
//!
//! - [`pagination_config`] - 목록 조회 페이지 크기 기본값과 상한
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export PAGINATION_DEFAULT_LIMIT="20"
//! export PAGINATION_MAX_LIMIT="100"
//! ```

pub mod pagination_config;

pub use pagination_config::*;
