//! # 공통 DTO 모듈
//!
//! 모든 서비스가 공유하는 응답 봉투, 페이지네이션, 헬스 체크 형태를 정의합니다.
//!
//! ```text
//! common/
//! ├── api_response.rs  - {success, data, error, meta} 봉투와 ApiError
//! ├── pagination.rs    - page/limit 정규화와 Meta 계산
//! └── health.rs        - HealthResponse / ServiceHealth
//! ```

pub mod api_response;
pub mod health;
pub mod pagination;

pub use api_response::{ApiError, ApiResponse, ErrorResponse};
pub use health::{HealthResponse, HealthStatus, ServiceHealth};
pub use pagination::{Meta, Pagination};
