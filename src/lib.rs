//! 포스티 소셜 로그인 토큰 서비스
//!
//! Google, Kakao, Naver 세 OAuth 프로바이더를 하나의 HS256 세션 토큰
//! 형식으로 연합하는 Rust 기반 인증 서비스입니다.
//! 서버 측 세션 저장소 없이 토큰 자체가 유일한 세션 표현입니다.
//!
//! # Features
//!
//! - **소셜 로그인**: Google ID 토큰, Kakao/Naver 액세스 토큰 검증
//! - **자체 토큰 코덱**: base64url(패딩 없음) + HMAC-SHA256, 상수 시간 서명 비교
//! - **토큰 갱신**: 만료 후에도 서명만 유효하면 조용한 재로그인
//! - **상태 없는 검증**: 요청 간 공유 가변 상태 없음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────┐
//! │ SessionIssuer/Refresher/Verifier    │ ← 오케스트레이션
//! └─────────────────────────────────────┘
//!          │                  │
//!          ▼                  ▼
//! ┌─────────────────┐  ┌─────────────────┐
//! │ ProviderAdapter │  │   TokenCodec    │ ← 프로바이더 API / 순수 코덱
//! └─────────────────┘  └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use posty_auth_server::config::AuthConfig;
//! use posty_auth_server::core::AppState;
//!
//! let config = AuthConfig::from_env()?;
//! let state = AppState::from_config(&config)?;
//!
//! let session = state.issuer.issue(Provider::Kakao, &access_token).await?;
//! println!("token: {}", session.token);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
