//! # Authentication Configuration Module
//!
//! 서명 시크릿, 프로바이더 엔드포인트, 아웃바운드 타임아웃 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! 설정은 [`AuthConfig::from_env`]로 기동 시 한 번 로드되어
//! 이후 불변 값으로 서비스 계층에 주입됩니다. 프로덕션 환경에서
//! `JWT_SECRET`이 없으면 추측 가능한 기본 시크릿으로 돌아가는 대신
//! [`AppError::ConfigurationError`]로 기동 자체를 거부합니다.

use std::env;
use std::time::Duration;

use crate::errors::AppError;

/// 개발 환경에서만 사용하는 기본 서명 시크릿
///
/// 프로덕션에서는 절대 사용되지 않습니다. `PROFILE=prod`에서
/// `JWT_SECRET`이 누락되면 기동이 실패합니다.
const DEV_JWT_SECRET: &str = "dev-jwt-secret-posty-2025";

/// 프로바이더 API 호출 기본 타임아웃 (초)
const DEFAULT_PROVIDER_TIMEOUT_SECONDS: u64 = 10;

/// 실행 환경 구분
///
/// `PROFILE` 환경변수로 결정됩니다. 알 수 없는 값은 안전한 쪽인
/// 프로덕션으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 (기본값, 개발용 시크릿 허용)
    Development,
    /// 프로덕션 환경 (필수 설정 누락 시 기동 거부)
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// * `PROFILE=dev` - 개발 환경 (기본값)
    /// * `PROFILE=prod` - 프로덕션 환경
    pub fn current() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
        Self::from_str(&profile)
    }

    /// 문자열에서 Environment를 생성합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경 여부
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 인증 서비스 전체 설정
///
/// 발급기/검증기가 공유하는 서명 시크릿과 세 프로바이더의
/// userinfo 엔드포인트 주소를 담습니다. 엔드포인트는 테스트에서
/// 로컬 목 서버로 바꿔치기할 수 있도록 설정값으로 노출됩니다.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// 실행 환경
    pub environment: Environment,
    /// HS256 서명에 사용하는 공유 시크릿
    pub jwt_secret: String,
    /// Google OAuth Client ID (설정 시 tokeninfo aud 검증 활성화)
    pub google_client_id: Option<String>,
    /// Google ID 토큰 검증 엔드포인트
    pub google_tokeninfo_uri: String,
    /// Kakao 사용자 정보 엔드포인트
    pub kakao_userinfo_uri: String,
    /// Naver 사용자 정보 엔드포인트
    pub naver_userinfo_uri: String,
    /// 프로바이더 API 아웃바운드 호출 타임아웃
    pub provider_timeout: Duration,
}

impl AuthConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 프로덕션에서 `JWT_SECRET`이
    ///   없거나 비어 있는 경우. 호출 측(main)은 이 에러를 받으면
    ///   프로세스를 종료해야 합니다.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = Environment::current();
        let jwt_secret = Self::load_jwt_secret(environment)?;

        Ok(Self {
            environment,
            jwt_secret,
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.is_empty()),
            google_tokeninfo_uri: env::var("GOOGLE_TOKENINFO_URI")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string()),
            kakao_userinfo_uri: env::var("KAKAO_USERINFO_URI")
                .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string()),
            naver_userinfo_uri: env::var("NAVER_USERINFO_URI")
                .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string()),
            provider_timeout: Duration::from_secs(
                env::var("PROVIDER_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECONDS),
            ),
        })
    }

    /// 서명 시크릿을 로드합니다.
    ///
    /// 프로덕션: `JWT_SECRET` 필수. 누락 시 에러 로그 후 기동 거부.
    /// 개발: 누락 시 개발 전용 기본 시크릿 사용.
    fn load_jwt_secret(environment: Environment) -> Result<String, AppError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret),
            _ if environment.is_production() => {
                log::error!("🚨 JWT_SECRET 환경변수가 프로덕션에서 설정되지 않았습니다!");
                Err(AppError::ConfigurationError(
                    "Missing required environment variable: JWT_SECRET".to_string(),
                ))
            }
            _ => {
                log::warn!("JWT_SECRET 미설정, 개발용 기본 시크릿을 사용합니다");
                Ok(DEV_JWT_SECRET.to_string())
            }
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값은 `127.0.0.1` 입니다.
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버 포트를 반환합니다.
    ///
    /// 기본값은 `8080` 이며, 파싱에 실패하면 기본값으로 돌아갑니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080)
    }
}
