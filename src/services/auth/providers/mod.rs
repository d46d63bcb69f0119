//! 프로바이더 어댑터 모듈
//!
//! 각 어댑터는 프로바이더별 자격증명(ID 토큰 또는 액세스 토큰)을 받아
//! 해당 프로바이더의 userinfo 엔드포인트를 호출하고, 응답을 공통
//! [`ClaimsInput`] 형태로 정규화합니다. 토큰 코덱은 건드리지 않습니다.
//!
//! ## 공통 계약
//!
//! - `resolve` 호출당 정확히 한 번의 아웃바운드 네트워크 호출
//! - 재시도 없음, 캐싱 없음: 일시적 프로바이더 장애는 그대로 호출자에게 전파
//! - 설정된 타임아웃을 넘기면 `UpstreamUnavailable`
//!
//! ## 프로바이더별 차이
//!
//! | 프로바이더 | 자격증명 | 엔드포인트 | 실패 신호 |
//! |------------|----------|------------|-----------|
//! | Google | OAuth ID 토큰 | tokeninfo | HTTP 상태 + aud 불일치 |
//! | Kakao | OAuth 액세스 토큰 | `/v2/user/me` | HTTP 상태 |
//! | Naver | OAuth 액세스 토큰 | `/v1/nid/me` | HTTP 상태 + 응답 내 `resultcode` |

pub mod google;
pub mod kakao;
pub mod naver;

use async_trait::async_trait;

use crate::domain::claims::{ClaimsInput, Provider};
use crate::errors::AppError;

pub use google::GoogleAdapter;
pub use kakao::KakaoAdapter;
pub use naver::NaverAdapter;

/// 프로바이더 자격증명을 정규화된 사용자 정보로 교환하는 어댑터
///
/// 세 구현체가 하나의 인터페이스를 공유하며, 발급기는 프로바이더
/// 태그로 구현체를 선택합니다. 테스트에서는 네트워크 없는 목 구현을
/// 주입합니다.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// 이 어댑터가 담당하는 프로바이더 태그
    fn provider(&self) -> Provider;

    /// 자격증명을 검증하고 정규화된 사용자 정보를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredential` - 프로바이더가 자격증명을 거부함
    /// * `AppError::AudienceMismatch` - (Google) 다른 클라이언트용 토큰
    /// * `AppError::ProviderError` - (Naver) 응답 내 결과 코드가 실패
    /// * `AppError::UpstreamUnavailable` - 네트워크/타임아웃/응답 파싱 실패
    async fn resolve(&self, credential: &str) -> Result<ClaimsInput, AppError>;
}

/// 어댑터 공용 reqwest 클라이언트를 생성합니다.
///
/// 프로바이더가 응답하지 않을 때 요청이 무한정 열려 있지 않도록
/// 명시적 타임아웃을 겁니다.
pub(crate) fn build_http_client(
    timeout: std::time::Duration,
) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))
}
