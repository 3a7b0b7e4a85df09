use serde::{Deserialize, Serialize};

use crate::domain::dto::common::pagination::Meta;
use crate::errors::{AppError, ErrorCode};

/// 표준 API 에러
///
/// 내부 전용 필드 이름이나 엔티티 데이터는 `details`에 담지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<&AppError> for ApiError {
    /// 서버 측 장애(5xx)의 원본 메시지는 일반 문구로 대체합니다.
    fn from(error: &AppError) -> Self {
        let message = match error.code() {
            ErrorCode::InternalServer => "Internal server error".to_string(),
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable".to_string(),
            _ => error.message().to_string(),
        };

        ApiError::new(error.code(), message)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError::from(&error)
    }
}

/// API 응답 래퍼
///
/// 모든 서비스 응답을 감싸는 `{success, data, error, meta}` 봉투입니다.
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": "..." },
///   "meta": { "page": 1, "limit": 20, "total": 95, "total_pages": 5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    /// 페이지네이션 메타데이터를 포함한 성공 응답
    pub fn paginated(data: T, meta: Meta) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            meta: None,
        }
    }

    /// 서비스 결과를 봉투로 감쌉니다.
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(ApiError::from(&e)),
        }
    }
}

/// 레거시 에러 응답
///
/// 봉투 도입 이전 결제 서비스가 반환하던 평면 에러 형태입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let api_error = ApiError::from(error);

        Self {
            error: api_error.code.to_string(),
            message: Some(api_error.message),
            code: Some(error.code().status_code().as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::common::Pagination;

    #[test]
    fn test_success_envelope_omits_error_and_meta() {
        let response = ApiResponse::success(serde_json::json!({ "id": "u1" }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], "u1");
        assert!(json.get("error").is_none());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn test_paginated_envelope() {
        let meta = Pagination::new(1, 20).meta(95);
        let response = ApiResponse::paginated(vec![1, 2, 3], meta);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["total_pages"], 5);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_failure_envelope_from_result() {
        let result: Result<String, AppError> =
            Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        let response = ApiResponse::from_result(result);

        assert!(!response.success);
        assert!(response.data.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.message, "사용자를 찾을 수 없습니다");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_server_error_message_is_generic() {
        let error = ApiError::from(AppError::InternalError("db password wrong".to_string()));
        assert_eq!(error.code, ErrorCode::InternalServer);
        assert_eq!(error.message, "Internal server error");
    }

    #[test]
    fn test_envelope_deserializes_without_optional_fields() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.data.is_none());
        assert!(response.meta.is_none());
    }

    #[test]
    fn test_legacy_error_response() {
        let legacy = ErrorResponse::from(&AppError::ConflictError("duplicate".to_string()));
        assert_eq!(legacy.error, "conflict");
        assert_eq!(legacy.message.as_deref(), Some("duplicate"));
        assert_eq!(legacy.code, Some(409));
    }
}
