//! 인증 응답 DTO

use serde::Serialize;

use crate::domain::claims::SessionUser;
use crate::services::auth::sessions::SessionTokens;

/// 발급/갱신 성공 응답
///
/// 세 로그인 엔드포인트와 갱신 엔드포인트가 동일한 구조를 반환합니다.
/// `expires_in`은 항상 86400(24시간, 초)입니다.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: SessionUser,
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

impl From<SessionTokens> for AuthResponse {
    fn from(session: SessionTokens) -> Self {
        Self {
            success: true,
            user: SessionUser::from(&session.claims),
            token: session.token,
            expires_in: session.expires_in,
        }
    }
}
