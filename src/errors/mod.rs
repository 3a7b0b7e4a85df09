//! 에러 처리 모듈
//!
//! - [`errors::AppError`] - 전역 에러 열거형
//! - [`errors::ErrorCode`] - 클라이언트에 노출되는 닫힌 에러 코드 집합
//! - [`errors::AppResult`] - `Result<T, AppError>` 별칭

pub mod errors;

pub use errors::{AppError, AppResult, ErrorCode, ErrorContext};
