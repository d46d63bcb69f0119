//! Google 프로바이더 어댑터
//!
//! 클라이언트가 Google Sign-In SDK로 받은 OAuth ID 토큰을
//! Google tokeninfo 엔드포인트로 검증합니다.
//!
//! ## API 호출 형식
//!
//! ```text
//! GET https://oauth2.googleapis.com/tokeninfo?id_token=ID_TOKEN
//! ```
//!
//! ## 응답 데이터 구조
//!
//! ```json
//! {
//!   "aud": "123456789-abc.apps.googleusercontent.com",
//!   "sub": "109876543",
//!   "email": "user@gmail.com",
//!   "name": "John Doe",
//!   "picture": "https://lh3.googleusercontent.com/.../photo.jpg"
//! }
//! ```
//!
//! `GOOGLE_CLIENT_ID`가 설정된 경우 `aud` 클레임이 일치하지 않으면
//! 다른 앱용으로 발급된 토큰이므로 거부합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::claims::{ClaimsInput, Provider};
use crate::errors::AppError;
use crate::services::auth::providers::{ProviderAdapter, build_http_client};
use crate::utils::string_utils::clean_optional_string;

/// Google tokeninfo 응답 중 이 서비스가 사용하는 필드
#[derive(Debug, Deserialize)]
struct GoogleTokenInfo {
    aud: String,
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

/// Google ID 토큰 어댑터
pub struct GoogleAdapter {
    client: reqwest::Client,
    tokeninfo_uri: String,
    expected_client_id: Option<String>,
}

impl GoogleAdapter {
    /// 설정에서 Google 어댑터를 생성합니다.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(config.provider_timeout)?,
            tokeninfo_uri: config.google_tokeninfo_uri.clone(),
            expected_client_id: config.google_client_id.clone(),
        })
    }
}

#[async_trait]
impl ProviderAdapter for GoogleAdapter {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn resolve(&self, credential: &str) -> Result<ClaimsInput, AppError> {
        // 1. tokeninfo 엔드포인트로 ID 토큰 검증
        let response = self
            .client
            .get(&self.tokeninfo_uri)
            .query(&[("id_token", credential)])
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Google 토큰 검증 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::InvalidCredential(
                "Google ID 토큰이 유효하지 않습니다".to_string(),
            ));
        }

        let info = response
            .json::<GoogleTokenInfo>()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Google 응답 파싱 실패: {}", e)))?;

        // 2. audience 검증 (클라이언트 ID가 설정된 경우에만)
        if let Some(expected) = &self.expected_client_id {
            if &info.aud != expected {
                log::warn!("Google 토큰 audience 불일치: {}", info.aud);
                return Err(AppError::AudienceMismatch(
                    "다른 클라이언트용으로 발급된 Google 토큰입니다".to_string(),
                ));
            }
        }

        Ok(ClaimsInput {
            provider_user_id: info.sub,
            email: clean_optional_string(info.email),
            display_name: clean_optional_string(info.name),
            photo_url: clean_optional_string(info.picture),
        })
    }
}
