//! 도메인 모델 모듈
//!
//! 토큰에 실리는 클레임 구조와 HTTP 요청/응답 DTO를 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`claims`] - `Provider` 태그, `Claims`, `ClaimsInput` 등 토큰 페이로드 모델
//! - [`dto`] - 엔드포인트 요청/응답 DTO

pub mod claims;
pub mod dto;

pub use claims::{Claims, ClaimsInput, Provider, SessionUser};
pub use dto::request::{GoogleLoginRequest, SocialLoginRequest};
pub use dto::response::AuthResponse;
