//! Naver 프로바이더 어댑터
//!
//! 클라이언트가 Naver SDK로 받은 OAuth 액세스 토큰을 Bearer 자격증명으로
//! 네이버 회원 프로필 API에 전달해 검증합니다.
//!
//! ## API 호출 형식
//!
//! ```text
//! GET https://openapi.naver.com/v1/nid/me
//! Authorization: Bearer ACCESS_TOKEN
//! ```
//!
//! ## 응답 데이터 구조
//!
//! 네이버는 실패를 HTTP 상태가 아니라 200 응답 안의 `resultcode`로
//! 감싸서 전달하는 경우가 있습니다. 성공 코드는 `"00"` 입니다.
//!
//! ```json
//! {
//!   "resultcode": "00",
//!   "message": "success",
//!   "response": {
//!     "id": "abcdEFGH1234",
//!     "email": "user@naver.com",
//!     "name": "홍길동",
//!     "nickname": "길동이",
//!     "profile_image": "https://ssl.pstatic.net/.../img.png"
//!   }
//! }
//! ```
//!
//! 표시 이름은 `name`을 우선 사용하고 없으면 `nickname`으로 대체합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::claims::{ClaimsInput, Provider};
use crate::errors::AppError;
use crate::services::auth::providers::{ProviderAdapter, build_http_client};
use crate::utils::string_utils::clean_optional_string;

/// 네이버 성공 결과 코드
const NAVER_SUCCESS_CODE: &str = "00";

#[derive(Debug, Deserialize)]
struct NaverUserInfo {
    resultcode: String,
    message: Option<String>,
    response: Option<NaverProfile>,
}

#[derive(Debug, Deserialize)]
struct NaverProfile {
    id: String,
    email: Option<String>,
    name: Option<String>,
    nickname: Option<String>,
    profile_image: Option<String>,
}

/// Naver 액세스 토큰 어댑터
pub struct NaverAdapter {
    client: reqwest::Client,
    userinfo_uri: String,
}

impl NaverAdapter {
    /// 설정에서 Naver 어댑터를 생성합니다.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(config.provider_timeout)?,
            userinfo_uri: config.naver_userinfo_uri.clone(),
        })
    }
}

#[async_trait]
impl ProviderAdapter for NaverAdapter {
    fn provider(&self) -> Provider {
        Provider::Naver
    }

    async fn resolve(&self, credential: &str) -> Result<ClaimsInput, AppError> {
        let response = self
            .client
            .get(&self.userinfo_uri)
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("Naver 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::InvalidCredential(
                "Naver 액세스 토큰이 유효하지 않습니다".to_string(),
            ));
        }

        let info = response
            .json::<NaverUserInfo>()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Naver 응답 파싱 실패: {}", e)))?;

        // 네이버는 에러를 200 응답 내부 결과 코드로 전달
        if info.resultcode != NAVER_SUCCESS_CODE {
            let message = info.message.unwrap_or_else(|| "unknown".to_string());
            log::warn!(
                "Naver API 결과 코드 실패: {} ({})",
                info.resultcode,
                message
            );
            return Err(AppError::ProviderError(format!(
                "Naver API 오류: {}",
                message
            )));
        }

        let profile = info.response.ok_or_else(|| {
            AppError::ProviderError("Naver 응답에 프로필이 없습니다".to_string())
        })?;

        // 표시 이름은 name → nickname 순서로 대체
        let display_name =
            clean_optional_string(profile.name).or_else(|| clean_optional_string(profile.nickname));

        Ok(ClaimsInput {
            provider_user_id: profile.id,
            email: clean_optional_string(profile.email),
            display_name,
            photo_url: clean_optional_string(profile.profile_image),
        })
    }
}
