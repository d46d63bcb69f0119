//! Authentication HTTP Handlers
//!
//! 소셜 로그인 토큰 발급과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 세 OAuth 프로바이더를 하나의 세션 토큰 형식으로 연합하며,
//! 서버 측 저장소 없는 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **발급**: `POST /auth/google`, `POST /auth/kakao`, `POST /auth/naver`
//! - **갱신**: `POST /auth/refresh` (만료된 토큰도 허용)
//! - **검증**: `POST /auth/verify`
//!
//! 발급/갱신의 성공 응답은 모두 같은 구조입니다:
//!
//! ```json
//! {
//!   "success": true,
//!   "user": { "uid": "...", "email": null, "displayName": null, "photoURL": null, "provider": "kakao" },
//!   "token": "xxx.yyy.zzz",
//!   "expiresIn": 86400
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::json;
use validator::Validate;

use crate::core::state::AppState;
use crate::domain::claims::{Provider, SessionUser};
use crate::domain::dto::request::{GoogleLoginRequest, SocialLoginRequest};
use crate::domain::dto::response::AuthResponse;
use crate::errors::AppError;

/// Google 로그인 핸들러
///
/// Google Sign-In SDK가 발급한 ID 토큰을 검증하고 세션 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/google`
#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 (네트워크 호출 전에 빈 자격증명 거부)
    payload
        .validate()
        .map_err(|_| AppError::MissingCredential("idToken이 필요합니다".to_string()))?;

    let session = state.issuer.issue(Provider::Google, &payload.id_token).await?;

    Ok(HttpResponse::Ok().json(AuthResponse::from(session)))
}

/// Kakao 로그인 핸들러
///
/// Kakao SDK가 발급한 액세스 토큰을 검증하고 세션 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/kakao`
#[post("/kakao")]
pub async fn kakao_login(
    state: web::Data<AppState>,
    payload: web::Json<SocialLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::MissingCredential("accessToken이 필요합니다".to_string()))?;

    let session = state
        .issuer
        .issue(Provider::Kakao, &payload.access_token)
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse::from(session)))
}

/// Naver 로그인 핸들러
///
/// Naver SDK가 발급한 액세스 토큰을 검증하고 세션 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/naver`
#[post("/naver")]
pub async fn naver_login(
    state: web::Data<AppState>,
    payload: web::Json<SocialLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::MissingCredential("accessToken이 필요합니다".to_string()))?;

    let session = state
        .issuer
        .issue(Provider::Naver, &payload.access_token)
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse::from(session)))
}

/// 토큰 갱신 핸들러
///
/// Authorization 헤더의 기존 토큰으로 새 토큰을 재발급합니다.
/// 만료된 토큰도 서명만 유효하면 갱신됩니다 (조용한 재로그인).
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = extract_bearer_token(&req)?;
    let session = state.refresher.refresh(token)?;

    Ok(HttpResponse::Ok().json(AuthResponse::from(session)))
}

/// 토큰 검증 핸들러
///
/// Authorization 헤더의 토큰에 대해 서명과 만료를 검증합니다.
/// 실패 응답은 기존 클라이언트 호환을 위해 `valid: false`를 포함하는
/// 전용 형태를 사용합니다.
///
/// # Endpoint
/// `POST /auth/verify`
#[post("/verify")]
pub async fn verify_token(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let result = extract_bearer_token(&req).and_then(|token| state.verifier.verify(token));

    match result {
        Ok(claims) => HttpResponse::Ok().json(json!({
            "success": true,
            "valid": true,
            "user": SessionUser::from(&claims),
            "iat": claims.iat,
            "exp": claims.exp
        })),
        Err(e) => {
            log::warn!("토큰 검증 실패: {}", e);
            HttpResponse::Unauthorized().json(json!({
                "success": false,
                "valid": false,
                "error": e.kind(),
                "message": e.to_string()
            }))
        }
    }
}

/// HTTP 요청의 Authorization 헤더에서 Bearer 토큰 추출
fn extract_bearer_token(req: &HttpRequest) -> Result<&str, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::MalformedToken("Authorization 헤더가 없습니다".to_string())
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::MalformedToken("유효하지 않은 인증 헤더 형식입니다".to_string())
    })
}
