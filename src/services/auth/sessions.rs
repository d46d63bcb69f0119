//! 세션 발급/갱신/검증 오케스트레이션
//!
//! 프로바이더 어댑터와 토큰 코덱을 묶어 세 가지 세션 연산을 제공합니다.
//!
//! - [`SessionIssuer`] - 프로바이더 자격증명으로 새 세션 토큰 발급
//! - [`SessionRefresher`] - 기존 토큰에서 신원을 유지한 채 새 토큰 재발급
//! - [`SessionVerifier`] - 들어온 토큰의 서명과 만료를 검증
//!
//! ## 토큰 수명 상태
//!
//! ```text
//! Issued ──► Valid (exp 이전) ──► Expired
//!    ▲              │                 │
//!    └──── refresh ─┴─────────────────┘
//! ```
//!
//! 갱신은 Valid/Expired 어느 상태에서도 가능하지만, 변조되었거나
//! 구조가 깨진 토큰은 갱신할 수 없습니다. Revoked 상태는 존재하지
//! 않습니다. 서버는 아무것도 저장하지 않으므로 토큰은 `exp`까지
//! 무조건 유효합니다.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::claims::{Claims, Provider, TOKEN_TTL_SECONDS};
use crate::errors::AppError;
use crate::services::auth::providers::ProviderAdapter;
use crate::services::auth::token_codec::TokenCodec;

/// 발급/갱신 결과
///
/// 새로 만든 토큰 문자열과 그 안에 담긴 클레임, 그리고 초 단위
/// 만료 시간(항상 86400)을 함께 반환합니다.
#[derive(Debug)]
pub struct SessionTokens {
    pub token: String,
    pub claims: Claims,
    pub expires_in: i64,
}

/// 세션 토큰 발급기
///
/// 프로바이더 태그로 어댑터를 선택해 자격증명을 검증하고,
/// 정규화된 사용자 정보로 새 토큰을 만듭니다.
pub struct SessionIssuer {
    codec: Arc<TokenCodec>,
    adapters: HashMap<Provider, Arc<dyn ProviderAdapter>>,
}

impl SessionIssuer {
    /// 코덱과 어댑터 집합으로 발급기를 생성합니다.
    pub fn new(
        codec: Arc<TokenCodec>,
        adapters: HashMap<Provider, Arc<dyn ProviderAdapter>>,
    ) -> Self {
        Self { codec, adapters }
    }

    /// 프로바이더 자격증명으로 새 세션 토큰을 발급합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. 자격증명 존재 확인 (네트워크 호출 전에 거부)
    /// 2. 어댑터 `resolve`로 프로바이더 검증 및 사용자 정보 획득
    /// 3. `uid = {provider}_{providerUserId}`, `iat = now`,
    ///    `exp = now + 86400`으로 클레임 구성
    /// 4. 코덱으로 인코딩
    ///
    /// # Errors
    ///
    /// * `AppError::MissingCredential` - 자격증명이 비어 있음
    /// * 그 외 - 어댑터가 반환한 에러를 그대로 전파
    pub async fn issue(
        &self,
        provider: Provider,
        credential: &str,
    ) -> Result<SessionTokens, AppError> {
        if credential.trim().is_empty() {
            return Err(AppError::MissingCredential(format!(
                "{} 자격증명이 필요합니다",
                provider
            )));
        }

        let adapter = self.adapters.get(&provider).ok_or_else(|| {
            AppError::InternalError(format!("등록되지 않은 프로바이더: {}", provider))
        })?;

        let input = adapter.resolve(credential).await?;
        let claims = Claims::issue(provider, input, Utc::now().timestamp());
        let token = self.codec.encode(&claims)?;

        log::info!("{} 로그인 성공: {}", provider, claims.uid);

        Ok(SessionTokens {
            token,
            claims,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }
}

/// 세션 토큰 갱신기
///
/// 기존 토큰의 신원 클레임을 유지한 채 타임스탬프만 갱신한 새 토큰을
/// 발급합니다. 만료 검사를 하지 않는 것은 의도된 동작입니다.
/// 갱신의 목적 자체가 이미 만료되었을 수 있는 토큰의 연장이기 때문입니다
/// (조용한 재로그인). 단, 서명이 깨졌거나 구조가 잘못된 토큰은
/// 갱신할 수 없습니다.
pub struct SessionRefresher {
    codec: Arc<TokenCodec>,
}

impl SessionRefresher {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// 기존 토큰에서 새 토큰을 재발급합니다.
    ///
    /// # Errors
    ///
    /// `TokenCodec::decode`가 반환하는 에러(`MalformedToken`,
    /// `InvalidSignature`, `InvalidPayload`)를 그대로 전파합니다.
    /// `TokenExpired`는 여기서 절대 발생하지 않습니다.
    pub fn refresh(&self, old_token: &str) -> Result<SessionTokens, AppError> {
        // 만료 무시 디코드: decode_and_validate가 아니라 decode
        let old_claims = self.codec.decode(old_token)?;

        let claims = old_claims.renew(Utc::now().timestamp());
        let token = self.codec.encode(&claims)?;

        log::info!("토큰 갱신 성공: {}", claims.uid);

        Ok(SessionTokens {
            token,
            claims,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }
}

/// 세션 토큰 검증기
///
/// 인가 목적으로 들어온 토큰의 서명과 만료를 모두 확인합니다.
/// 부수효과 없는 순수 검증입니다.
pub struct SessionVerifier {
    codec: Arc<TokenCodec>,
}

impl SessionVerifier {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 서명은 유효하나 만료됨
    /// * 그 외 - `TokenCodec::decode`의 구조/서명 에러
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.codec.decode_and_validate(token)
    }
}
