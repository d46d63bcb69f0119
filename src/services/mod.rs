//! 비즈니스 로직 서비스 모듈
//!
//! 토큰 코덱, 프로바이더 어댑터, 세션 발급/갱신/검증 오케스트레이션을 제공합니다.

pub mod auth;
