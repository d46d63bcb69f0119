//! 인증 서비스 모듈
//!
//! ## 모듈 구성
//!
//! - [`token_codec`] - HS256 토큰 인코딩/디코딩/검증 (순수, I/O 없음)
//! - [`providers`] - Google/Kakao/Naver 프로바이더 어댑터
//! - [`sessions`] - 세션 발급/갱신/검증 오케스트레이션
//!
//! ## 의존 순서
//!
//! ```text
//! TokenCodec (의존성 없음)
//!     ▲
//!     │
//! ProviderAdapter (외부 네트워크 + 클레임 형태)
//!     ▲
//!     │
//! SessionIssuer / SessionRefresher / SessionVerifier
//! ```

pub mod providers;
pub mod sessions;
pub mod token_codec;

pub use providers::ProviderAdapter;
pub use sessions::{SessionIssuer, SessionRefresher, SessionTokens, SessionVerifier};
pub use token_codec::TokenCodec;
