//! 인증 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// Google 로그인 요청 DTO
///
/// Google Sign-In SDK가 발급한 OAuth ID 토큰을 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[serde(rename = "idToken", default)]
    #[validate(length(min = 1, message = "idToken이 필요합니다"))]
    pub id_token: String,
}

/// Kakao/Naver 로그인 요청 DTO
///
/// 프로바이더 SDK가 발급한 OAuth 액세스 토큰을 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLoginRequest {
    #[serde(rename = "accessToken", default)]
    #[validate(length(min = 1, message = "accessToken이 필요합니다"))]
    pub access_token: String,
}
