//! 세션 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임(iat, exp)과 애플리케이션 특화 클레임을 포함합니다.
//! 클레임은 서버에 저장되지 않으며 토큰 자체가 유일한 표현입니다.
//! 발급과 갱신 때마다 새 클레임 객체가 만들어지고, 기존 객체는 절대 변경되지 않습니다.
//!
//! ## 와이어 필드명
//!
//! JSON 직렬화 시 필드명은 기존 클라이언트와의 호환을 위해
//! `uid`, `email`, `displayName`, `photoURL`, `provider`, `iat`, `exp`로 고정됩니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 토큰 수명 (초). 발급/갱신 시점에 항상 `exp == iat + TOKEN_TTL_SECONDS`.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// OAuth 인증 프로바이더 태그
///
/// 어떤 어댑터가 이 세션을 만들었는지 식별합니다.
/// `Apple`은 클레임 호환용 태그로만 존재합니다. 애플 로그인 발급은
/// 별도 배포에서 처리되지만, 해당 토큰의 검증/갱신은 여기서도 동작해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Kakao,
    Naver,
    Apple,
}

impl Provider {
    /// 소문자 문자열 표현 (uid 접두어와 와이어 값으로 사용)
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Kakao => "kakao",
            Provider::Naver => "naver",
            Provider::Apple => "apple",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 세션 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `uid`: `{provider}_{프로바이더 사용자 ID}` 형식의 안정적 식별자
/// - `email`, `display_name`, `photo_url`: 프로바이더 프로필 (없으면 null)
/// - `provider`: 인증 프로바이더 태그
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// 프로바이더 네임스페이스가 붙은 사용자 식별자
    pub uid: String,
    /// 사용자 이메일 (선택사항)
    pub email: Option<String>,
    /// 표시 이름 (선택사항)
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// 프로필 사진 URL (선택사항)
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    /// 인증 프로바이더
    pub provider: Provider,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 프로바이더 조회 결과로부터 새 클레임을 생성합니다.
    ///
    /// `uid`는 `{provider}_{providerUserId}`로 결정적으로 구성되어
    /// 같은 프로바이더 계정의 재로그인에서 항상 동일합니다.
    /// `exp`는 `iat + 86400` (24시간)으로 고정됩니다.
    pub fn issue(provider: Provider, input: ClaimsInput, now: i64) -> Self {
        Self {
            uid: format!("{}_{}", provider, input.provider_user_id),
            email: input.email,
            display_name: input.display_name,
            photo_url: input.photo_url,
            provider,
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        }
    }

    /// 기존 클레임의 신원 정보만 유지한 채 타임스탬프를 갱신한
    /// 새 클레임을 생성합니다. 기존 `iat`/`exp`는 버려집니다.
    pub fn renew(&self, now: i64) -> Self {
        Self {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
            provider: self.provider,
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        }
    }
}

/// 프로바이더 어댑터가 반환하는 정규화된 사용자 정보
///
/// 세 프로바이더의 서로 다른 응답 구조를 하나의 형태로 맞춘 것입니다.
/// 프로필 필드는 프로바이더가 제공하지 않으면 None으로 남습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimsInput {
    /// 프로바이더가 부여한 사용자 고유 ID
    pub provider_user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// 응답 본문의 `user` 객체
///
/// 타임스탬프를 제외한 신원 클레임만 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub provider: Provider,
}

impl From<&Claims> for SessionUser {
    fn from(claims: &Claims) -> Self {
        Self {
            uid: claims.uid.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name.clone(),
            photo_url: claims.photo_url.clone(),
            provider: claims.provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ClaimsInput {
        ClaimsInput {
            provider_user_id: "123".to_string(),
            email: Some("a@b.com".to_string()),
            display_name: Some("A".to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn test_uid_is_provider_namespaced() {
        let claims = Claims::issue(Provider::Google, sample_input(), 1_700_000_000);
        assert_eq!(claims.uid, "google_123");
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_uid_is_deterministic() {
        let first = Claims::issue(Provider::Kakao, sample_input(), 1_700_000_000);
        let second = Claims::issue(Provider::Kakao, sample_input(), 1_700_009_999);
        assert_eq!(first.uid, second.uid);
    }

    #[test]
    fn test_expiry_is_24_hours_after_issuance() {
        let claims = Claims::issue(Provider::Naver, sample_input(), 1_700_000_000);
        assert_eq!(claims.exp, claims.iat + 86_400);
    }

    #[test]
    fn test_renew_preserves_identity_and_recomputes_timestamps() {
        let old = Claims::issue(Provider::Google, sample_input(), 1_700_000_000);
        let renewed = old.renew(1_700_100_000);

        assert_eq!(renewed.uid, old.uid);
        assert_eq!(renewed.email, old.email);
        assert_eq!(renewed.provider, old.provider);
        assert_eq!(renewed.iat, 1_700_100_000);
        assert_eq!(renewed.exp, renewed.iat + 86_400);
        // 원본은 변경되지 않음
        assert_eq!(old.iat, 1_700_000_000);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims::issue(Provider::Google, sample_input(), 1_700_000_000);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["uid"], "google_123");
        assert_eq!(json["displayName"], "A");
        assert!(json["photoURL"].is_null());
        assert_eq!(json["provider"], "google");
        assert_eq!(json["iat"], 1_700_000_000);
    }

    #[test]
    fn test_provider_roundtrip_lowercase() {
        for (provider, tag) in [
            (Provider::Google, "\"google\""),
            (Provider::Kakao, "\"kakao\""),
            (Provider::Naver, "\"naver\""),
            (Provider::Apple, "\"apple\""),
        ] {
            assert_eq!(serde_json::to_string(&provider).unwrap(), tag);
            let parsed: Provider = serde_json::from_str(tag).unwrap();
            assert_eq!(parsed, provider);
        }
    }
}
