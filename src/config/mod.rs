//! # Configuration Module
//!
//! 토큰 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 기동 시점에 한 번 읽어
//! 명시적으로 생성된 [`AuthConfig`] 구조체로 고정합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! `PROFILE` 환경변수로 개발/프로덕션 환경을 구분합니다.
//! 프로덕션에서는 서명 시크릿 누락 시 프로세스 기동을 거부합니다.
//!
//! ### 2. 명시적 주입 (Explicit Injection)
//!
//! 설정은 모듈 전역 싱글톤이 아니라 기동 시 생성된 값 객체로
//! 발급기/검증기에 전달됩니다. 테스트에서는 서로 다른 시크릿을
//! 가진 설정을 자유롭게 만들어 주입할 수 있습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수 (프로덕션)
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택
//! export PROFILE="prod"                 # dev(기본) 또는 prod
//! export GOOGLE_CLIENT_ID="...apps.googleusercontent.com"  # audience 검증 활성화
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export PROVIDER_TIMEOUT_SECONDS="10"
//! ```

pub mod auth_config;

pub use auth_config::*;
