//! 애플리케이션 상태 구성
//!
//! 설정에서 코덱, 어댑터, 발급기/갱신기/검증기를 조립해
//! actix-web `web::Data`로 핸들러에 주입합니다.
//!
//! 모듈 전역 싱글톤 대신 기동 시 명시적으로 생성된 객체를 전달하므로
//! 테스트에서는 다른 시크릿과 목 어댑터로 구성된 상태를 자유롭게
//! 만들 수 있습니다. 요청 간 공유되는 가변 상태는 없습니다.
//! 시크릿은 기동 시 한 번 고정되고 이후 읽기 전용입니다.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::domain::claims::Provider;
use crate::errors::AppError;
use crate::services::auth::providers::{GoogleAdapter, KakaoAdapter, NaverAdapter, ProviderAdapter};
use crate::services::auth::sessions::{SessionIssuer, SessionRefresher, SessionVerifier};
use crate::services::auth::token_codec::TokenCodec;

/// 핸들러가 공유하는 애플리케이션 상태
pub struct AppState {
    pub issuer: SessionIssuer,
    pub refresher: SessionRefresher,
    pub verifier: SessionVerifier,
}

impl AppState {
    /// 설정에서 전체 서비스 그래프를 조립합니다.
    ///
    /// 코덱 하나를 세 서비스가 공유하고, 세 프로바이더 어댑터가
    /// 발급기에 등록됩니다.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let codec = Arc::new(TokenCodec::new(config.jwt_secret.as_bytes().to_vec()));

        let registered: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(GoogleAdapter::from_config(config)?),
            Arc::new(KakaoAdapter::from_config(config)?),
            Arc::new(NaverAdapter::from_config(config)?),
        ];

        let mut adapters: HashMap<Provider, Arc<dyn ProviderAdapter>> = HashMap::new();
        for adapter in registered {
            adapters.insert(adapter.provider(), adapter);
        }

        Ok(Self {
            issuer: SessionIssuer::new(codec.clone(), adapters),
            refresher: SessionRefresher::new(codec.clone()),
            verifier: SessionVerifier::new(codec),
        })
    }
}
