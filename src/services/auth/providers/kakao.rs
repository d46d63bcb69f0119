//! Kakao 프로바이더 어댑터
//!
//! 클라이언트가 Kakao SDK로 받은 OAuth 액세스 토큰을 Bearer 자격증명으로
//! 카카오 사용자 정보 API에 전달해 검증합니다.
//!
//! ## API 호출 형식
//!
//! ```text
//! GET https://kapi.kakao.com/v2/user/me
//! Authorization: Bearer ACCESS_TOKEN
//! ```
//!
//! ## 응답 데이터 구조
//!
//! ```json
//! {
//!   "id": 9876543,
//!   "kakao_account": {
//!     "email": "user@kakao.com",
//!     "profile": {
//!       "nickname": "포스티",
//!       "profile_image_url": "https://k.kakaocdn.net/.../img.jpg"
//!     }
//!   }
//! }
//! ```
//!
//! `kakao_account`와 그 안의 `profile`은 사용자 동의 범위에 따라
//! 통째로 빠질 수 있으므로 전부 선택적으로 취급하고 없으면 null로 둡니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::claims::{ClaimsInput, Provider};
use crate::errors::AppError;
use crate::services::auth::providers::{ProviderAdapter, build_http_client};
use crate::utils::string_utils::clean_optional_string;

#[derive(Debug, Deserialize)]
struct KakaoUserInfo {
    id: i64,
    kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Deserialize)]
struct KakaoAccount {
    email: Option<String>,
    profile: Option<KakaoProfile>,
}

#[derive(Debug, Deserialize)]
struct KakaoProfile {
    nickname: Option<String>,
    profile_image_url: Option<String>,
}

/// Kakao 액세스 토큰 어댑터
pub struct KakaoAdapter {
    client: reqwest::Client,
    userinfo_uri: String,
}

impl KakaoAdapter {
    /// 설정에서 Kakao 어댑터를 생성합니다.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(config.provider_timeout)?,
            userinfo_uri: config.kakao_userinfo_uri.clone(),
        })
    }
}

#[async_trait]
impl ProviderAdapter for KakaoAdapter {
    fn provider(&self) -> Provider {
        Provider::Kakao
    }

    async fn resolve(&self, credential: &str) -> Result<ClaimsInput, AppError> {
        let response = self
            .client
            .get(&self.userinfo_uri)
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("Kakao 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::InvalidCredential(
                "Kakao 액세스 토큰이 유효하지 않습니다".to_string(),
            ));
        }

        let info = response
            .json::<KakaoUserInfo>()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Kakao 응답 파싱 실패: {}", e)))?;

        // 프로필 필드는 동의 항목에 따라 없을 수 있음
        let (email, nickname, photo) = match info.kakao_account {
            Some(account) => {
                let (nickname, photo) = match account.profile {
                    Some(profile) => (profile.nickname, profile.profile_image_url),
                    None => (None, None),
                };
                (account.email, nickname, photo)
            }
            None => (None, None, None),
        };

        Ok(ClaimsInput {
            provider_user_id: info.id.to_string(),
            email: clean_optional_string(email),
            display_name: clean_optional_string(nickname),
            photo_url: clean_optional_string(photo),
        })
    }
}
