//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 발급/갱신/검증 파이프라인을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | HTTP 상태 | 의미 |
//! |------|-----------|------|
//! | `MissingCredential` | 400 | 클라이언트가 필수 자격증명을 누락 |
//! | `InvalidCredential` | 401 | 프로바이더가 자격증명을 거부 |
//! | `ProviderError` | 401 | 프로바이더 자체 결과 코드가 실패를 의미 |
//! | `AudienceMismatch` | 401 | 다른 클라이언트용으로 발급된 토큰 |
//! | `MalformedToken` | 401 | 세그먼트 수/base64 구조가 잘못된 토큰 |
//! | `InvalidSignature` | 401 | 변조되었거나 다른 시크릿으로 서명된 토큰 |
//! | `InvalidPayload` | 401 | 페이로드가 유효한 JSON이 아님 |
//! | `TokenExpired` | 401 | 서명은 유효하나 exp가 지난 토큰 |
//! | `UpstreamUnavailable` | 502 | 프로바이더 API 통신 실패 |
//! | `ConfigurationError` | 500 | 기동 시 필수 설정 누락 (프로세스 시작 거부) |
//! | `InternalError` | 500 | 기타 시스템 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn check_credential(token: &str) -> Result<(), AppError> {
//!     if token.trim().is_empty() {
//!         return Err(AppError::MissingCredential("accessToken이 필요합니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 토큰 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 자격증명 누락 (400 Bad Request)
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// 프로바이더가 자격증명을 거부함 (401 Unauthorized)
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// 프로바이더가 200 응답 내부 결과 코드로 실패를 알림 (401 Unauthorized)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// 다른 클라이언트 ID로 발급된 토큰 (401 Unauthorized)
    #[error("Audience mismatch: {0}")]
    AudienceMismatch(String),

    /// 구조적으로 잘못된 토큰 (401 Unauthorized)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 서명 검증 실패 (401 Unauthorized)
    #[error("토큰 서명이 유효하지 않습니다")]
    InvalidSignature,

    /// 페이로드 JSON 디코드 실패 (401 Unauthorized)
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// 만료된 토큰 (401 Unauthorized)
    #[error("토큰이 만료되었습니다")]
    TokenExpired,

    /// 프로바이더 API 통신 실패 (502 Bad Gateway)
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// 필수 설정 누락 (500 Internal Server Error, 기동 시 치명적)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 응답 본문의 `error` 필드에 들어가는 기계 판독용 식별자
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingCredential(_) => "missing_credential",
            AppError::InvalidCredential(_) => "invalid_credential",
            AppError::ProviderError(_) => "provider_error",
            AppError::AudienceMismatch(_) => "audience_mismatch",
            AppError::MalformedToken(_) => "malformed_token",
            AppError::InvalidSignature => "invalid_signature",
            AppError::InvalidPayload(_) => "invalid_payload",
            AppError::TokenExpired => "token_expired",
            AppError::UpstreamUnavailable(_) => "upstream_unavailable",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::MissingCredential(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredential(_)
            | AppError::ProviderError(_)
            | AppError::AudienceMismatch(_)
            | AppError::MalformedToken(_)
            | AppError::InvalidSignature
            | AppError::InvalidPayload(_)
            | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": self.kind(),
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_missing_credential_response() {
        let error = AppError::MissingCredential("idToken이 필요합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credential_response() {
        let error = AppError::InvalidCredential("Invalid access token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for error in [
            AppError::MalformedToken("abc.def".to_string()),
            AppError::InvalidSignature,
            AppError::InvalidPayload("not json".to_string()),
            AppError::TokenExpired,
            AppError::AudienceMismatch("aud".to_string()),
            AppError::ProviderError("024".to_string()),
        ] {
            let response = error.error_response();
            assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_upstream_unavailable_response() {
        let error = AppError::UpstreamUnavailable("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_configuration_error_response() {
        let error = AppError::ConfigurationError("JWT_SECRET must be set".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(AppError::TokenExpired.kind(), "token_expired");
        assert_eq!(AppError::InvalidSignature.kind(), "invalid_signature");
        assert_eq!(
            AppError::MalformedToken(String::new()).kind(),
            "malformed_token"
        );
    }
}
