//! 계약 라이브러리 전역에서 사용하는 에러 시스템
//!
//! 서비스 경계에서 발생하는 모든 실패를 하나의 `AppError` 열거형으로 표현합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 통해
//! 표준 응답 봉투(`ApiResponse`) 형태의 HTTP 응답으로 자동 변환됩니다.
//!
//! ## 에러 코드 매핑
//!
//! | AppError | ErrorCode | HTTP Status |
//! |----------|-----------|-------------|
//! | `ValidationError` | `validation_error` | 400 Bad Request |
//! | `BadRequest` | `bad_request` | 400 Bad Request |
//! | `NotFound` | `not_found` | 404 Not Found |
//! | `ConflictError` | `conflict` | 409 Conflict |
//! | `AuthenticationError` | `unauthorized` | 401 Unauthorized |
//! | `AuthorizationError` | `forbidden` | 403 Forbidden |
//! | `ServiceUnavailable` | `service_unavailable` | 503 Service Unavailable |
//! | `ExternalServiceError` | `internal_server_error` | 500 Internal Server Error |
//! | `InternalError` | `internal_server_error` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use atlas_shared::errors::{AppError, AppResult};
//!
//! fn find_user(id: &str) -> AppResult<User> {
//!     store.get(id).cloned()
//!         .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 클라이언트에게 노출되는 에러 코드
///
/// 응답 봉투의 `error.code` 필드에 그대로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    #[serde(rename = "validation_error")]
    Validation,
    NotFound,
    Unauthorized,
    Forbidden,
    Conflict,
    #[serde(rename = "internal_server_error")]
    InternalServer,
    BadRequest,
    ServiceUnavailable,
}

impl ErrorCode {
    /// 와이어 포맷 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Validation => "validation_error",
            ErrorCode::NotFound => "not_found",
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::Conflict => "conflict",
            ErrorCode::InternalServer => "internal_server_error",
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::ServiceUnavailable => "service_unavailable",
        }
    }

    /// 이 코드에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            ErrorCode::Validation | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 투영(projection), 병합(merge), 서비스 클라이언트 호출에서 발생할 수 있는
/// 모든 실패를 포괄합니다. 각 변형은 하나의 [`ErrorCode`]에 대응합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 형식 오류, 허용 범위 밖의 값, 닫힌 열거형에 속하지 않는 저장 값 등.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 잘못된 요청 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 중복 이메일이나 슬러그, 종료 상태 엔티티에 대한 변경 시도 등.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 하위 서비스 이용 불가 (503 Service Unavailable)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러의 클라이언트 노출 코드
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError(_) => ErrorCode::Validation,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::ConflictError(_) => ErrorCode::Conflict,
            AppError::AuthenticationError(_) => ErrorCode::Unauthorized,
            AppError::AuthorizationError(_) => ErrorCode::Forbidden,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
            AppError::ExternalServiceError(_) | AppError::InternalError(_) => {
                ErrorCode::InternalServer
            }
        }
    }

    /// 에러에 담긴 원본 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ServiceUnavailable(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 서버 측 장애(5xx)인지 여부
    pub fn is_server_error(&self) -> bool {
        self.code().status_code().is_server_error()
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 사람이 읽을 수 있는 메시지로 변환합니다.
    ///
    /// 필드 이름은 요청 DTO의 공개 필드 이름이므로 그대로 노출해도 안전합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(None, &errors, &mut messages);
        messages.sort();

        AppError::ValidationError(messages.join(", "))
    }
}

fn collect_messages(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(p) => format!("{}.{}", p, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let text = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    if path == "__all__" {
                        out.push(text);
                    } else {
                        out.push(format!("{}: {}", path, text));
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}[{}]", path, index);
                    collect_messages(Some(&item_path), nested, out);
                }
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.code().status_code()
    }

    /// 표준 응답 봉투 형태의 HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// {
    ///   "success": false,
    ///   "error": { "code": "not_found", "message": "..." }
    /// }
    /// ```
    ///
    /// 5xx 에러의 원본 메시지는 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_server_error() {
            log::error!("{}", self);
        }

        let body = crate::domain::dto::common::ApiResponse::<()>::failure(self.into());

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("email: 유효한 이메일 주소를 입력해주세요".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_service_unavailable_error_response() {
        let error = AppError::ServiceUnavailable("phone provider down".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_response_hides_message() {
        let error = AppError::InternalError("connection string leaked".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "internal_server_error");
        assert!(!body.to_string().contains("connection string"));
    }

    #[test]
    fn test_conflict_error_envelope() {
        let error = AppError::ConflictError("이미 사용 중인 슬러그입니다".to_string());
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "conflict");
        assert_eq!(body["error"]["message"], "이미 사용 중인 슬러그입니다");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_error_code_serialization() {
        let codes = [
            (ErrorCode::Validation, "validation_error"),
            (ErrorCode::NotFound, "not_found"),
            (ErrorCode::Unauthorized, "unauthorized"),
            (ErrorCode::Forbidden, "forbidden"),
            (ErrorCode::Conflict, "conflict"),
            (ErrorCode::InternalServer, "internal_server_error"),
            (ErrorCode::BadRequest, "bad_request"),
            (ErrorCode::ServiceUnavailable, "service_unavailable"),
        ];

        for (code, expected) in codes {
            assert_eq!(serde_json::to_value(code).unwrap(), expected);
            assert_eq!(code.as_str(), expected);
        }
    }

    #[test]
    fn test_external_service_error_maps_to_internal_code() {
        let error = AppError::ExternalServiceError("stripe timeout".to_string());
        assert_eq!(error.code(), ErrorCode::InternalServer);
        assert!(error.is_server_error());
    }

    #[test]
    fn test_from_validation_errors() {
        #[derive(Validate)]
        struct Probe {
            #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
            email: String,
        }

        let errors = Probe { email: "not-an-email".to_string() }.validate().unwrap_err();
        let error = AppError::from(errors);

        assert_eq!(error.code(), ErrorCode::Validation);
        assert_eq!(error.message(), "email: 유효한 이메일 주소를 입력해주세요");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
