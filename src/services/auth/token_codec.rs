//! HS256 세션 토큰 코덱
//!
//! HMAC-SHA256 기반의 컴팩트 서명 토큰을 직접 인코딩/디코딩합니다.
//! 세 프로바이더를 하나의 세션 토큰 형식으로 연합하기 위한 코덱이며,
//! 기존 클라이언트가 보유한 토큰과 비트 단위로 호환되어야 합니다.
//!
//! ## 와이어 형식
//!
//! ```text
//! base64url(header_json) "." base64url(claims_json) "." base64url(hmac_sha256_signature)
//! ```
//!
//! - 헤더는 항상 `{"alg":"HS256","typ":"JWT"}` 고정이며 설정 불가능합니다.
//! - base64url은 패딩(`=`) 없이 `-`/`_` 알파벳을 사용합니다.
//!   인코딩과 디코딩 양쪽에서 같은 엔진을 쓰지 않으면 다른 JWT 소비자와의
//!   상호운용이 깨집니다.
//! - 서명은 앞 두 세그먼트를 `.`으로 이은 문자열 그대로를 입력으로 계산합니다.
//!
//! ## 검증 순서
//!
//! 1. `.` 기준으로 정확히 3개의 비어 있지 않은 세그먼트인지 확인 → `MalformedToken`
//! 2. 서명 세그먼트 base64 디코드 → 실패 시 `MalformedToken`
//! 3. HMAC 재계산 후 상수 시간 비교 → 불일치 시 `InvalidSignature`
//! 4. 페이로드 base64/JSON 디코드 → 실패 시 `InvalidPayload`
//! 5. (`decode_and_validate`에 한해) `exp < now` → `TokenExpired`
//!
//! 서명 비교는 [`subtle::ConstantTimeEq`]를 사용해 불일치 위치에 비례하는
//! 타이밍 정보가 새지 않도록 합니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::claims::Claims;
use crate::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

/// 고정 토큰 헤더. 모든 토큰에서 동일합니다.
#[derive(Debug, Serialize)]
struct TokenHeader {
    alg: &'static str,
    typ: &'static str,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: "HS256",
            typ: "JWT",
        }
    }
}

/// 세션 토큰 인코더/디코더
///
/// 공유 시크릿 하나로 서명과 검증을 모두 수행하는 대칭 코덱입니다.
/// 순수 인메모리 연산만 수행하며 요청 간 공유해도 안전합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let codec = TokenCodec::new(config.jwt_secret.as_bytes());
/// let token = codec.encode(&claims)?;
/// let decoded = codec.decode_and_validate(&token)?;
/// ```
pub struct TokenCodec {
    secret: Vec<u8>,
}

impl TokenCodec {
    /// 공유 시크릿으로 코덱을 생성합니다.
    ///
    /// 시크릿 검증(프로덕션에서 비어 있으면 기동 거부)은 설정 로드
    /// 단계에서 이미 끝난 상태라고 가정합니다.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// 클레임을 서명된 토큰 문자열로 인코딩합니다.
    ///
    /// 헤더와 클레임을 각각 JSON 직렬화하고 base64url(패딩 없음)로
    /// 인코딩한 뒤, 두 세그먼트를 `.`으로 이은 문자열 전체에 대한
    /// HMAC-SHA256 서명을 세 번째 세그먼트로 붙입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - JSON 직렬화 실패 (실질적으로 발생하지 않음)
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        let header_json = serde_json::to_vec(&TokenHeader::default())
            .map_err(|e| AppError::InternalError(format!("헤더 직렬화 실패: {}", e)))?;
        let claims_json = serde_json::to_vec(claims)
            .map_err(|e| AppError::InternalError(format!("클레임 직렬화 실패: {}", e)))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );
        let signature = self.sign(signing_input.as_bytes())?;

        Ok(format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// 토큰을 디코딩하고 서명을 검증합니다. 만료는 확인하지 않습니다.
    ///
    /// 갱신 플로우가 이미 만료된 토큰도 받아야 하므로 만료 검사는
    /// 의도적으로 [`TokenCodec::decode_and_validate`]에만 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedToken` - 세그먼트 수가 3이 아니거나 빈 세그먼트,
    ///   또는 서명 세그먼트 base64 디코드 실패
    /// * `AppError::InvalidSignature` - 재계산한 HMAC과 불일치
    /// * `AppError::InvalidPayload` - 페이로드가 유효한 base64/JSON이 아님
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(AppError::MalformedToken(
                "토큰은 3개의 세그먼트로 구성되어야 합니다".to_string(),
            ));
        }

        // 서명 입력은 앞 두 세그먼트를 이은 원본 문자열 그대로
        let signing_input = &token[..parts[0].len() + 1 + parts[1].len()];
        let provided_signature = URL_SAFE_NO_PAD
            .decode(parts[2])
            .map_err(|_| AppError::MalformedToken("서명 세그먼트 디코드 실패".to_string()))?;

        let expected_signature = self.sign(signing_input.as_bytes())?;
        if !bool::from(expected_signature.ct_eq(&provided_signature)) {
            return Err(AppError::InvalidSignature);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|_| AppError::InvalidPayload("페이로드 base64 디코드 실패".to_string()))?;

        serde_json::from_slice::<Claims>(&payload)
            .map_err(|e| AppError::InvalidPayload(format!("페이로드 JSON 파싱 실패: {}", e)))
    }

    /// 토큰을 디코딩하고 서명과 만료를 모두 검증합니다.
    ///
    /// # Errors
    ///
    /// [`TokenCodec::decode`]의 모든 에러에 더해:
    ///
    /// * `AppError::TokenExpired` - `exp`가 현재 시각보다 과거인 경우
    pub fn decode_and_validate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;

        let now = Utc::now().timestamp();
        if claims.exp < now {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }

    /// 서명 입력에 대한 HMAC-SHA256 서명 바이트를 계산합니다.
    fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>, AppError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::InternalError(format!("HMAC 키 초기화 실패: {}", e)))?;
        mac.update(signing_input);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::claims::{ClaimsInput, Provider};

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret".to_vec())
    }

    fn claims_at(iat: i64) -> Claims {
        Claims::issue(
            Provider::Kakao,
            ClaimsInput {
                provider_user_id: "9876543".to_string(),
                email: Some("user@example.com".to_string()),
                display_name: Some("포스티".to_string()),
                photo_url: Some("https://k.kakaocdn.net/img.jpg".to_string()),
            },
            iat,
        )
    }

    fn valid_claims() -> Claims {
        claims_at(Utc::now().timestamp())
    }

    #[test]
    fn test_roundtrip_preserves_all_fields() {
        let codec = codec();
        let claims = valid_claims();

        let token = codec.encode(&claims).unwrap();
        let decoded = codec.decode(&token).unwrap();

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_token_has_three_segments_and_fixed_header() {
        let codec = codec();
        let token = codec.encode(&valid_claims()).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header = URL_SAFE_NO_PAD.decode(parts[0]).unwrap();
        assert_eq!(
            String::from_utf8(header).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
        // 패딩 문자가 없어야 함
        assert!(!token.contains('='));
    }

    #[test]
    fn test_two_segment_token_is_malformed() {
        let result = codec().decode("abc.def");
        assert!(matches!(result, Err(AppError::MalformedToken(_))));
    }

    #[test]
    fn test_empty_segment_is_malformed() {
        let codec = codec();
        for token in ["..", "a..c", ".b.c", "a.b."] {
            assert!(matches!(
                codec.decode(token),
                Err(AppError::MalformedToken(_))
            ));
        }
    }

    #[test]
    fn test_tampering_any_segment_is_rejected() {
        let codec = codec();
        let token = codec.encode(&valid_claims()).unwrap();

        let segment_bounds: Vec<(usize, usize)> = {
            let mut bounds = Vec::new();
            let mut start = 0;
            for part in token.split('.') {
                bounds.push((start, start + part.len()));
                start += part.len() + 1;
            }
            bounds
        };

        for (start, end) in segment_bounds {
            for idx in [start, (start + end) / 2, end - 1] {
                let mut mutated: Vec<u8> = token.bytes().collect();
                // base64url 알파벳 안에서 다른 문자로 치환
                mutated[idx] = if mutated[idx] == b'A' { b'B' } else { b'A' };
                let mutated = String::from_utf8(mutated).unwrap();
                if mutated == token {
                    continue;
                }

                let result = codec.decode(&mutated);
                assert!(
                    matches!(
                        result,
                        Err(AppError::InvalidSignature)
                            | Err(AppError::MalformedToken(_))
                            | Err(AppError::InvalidPayload(_))
                    ),
                    "변조된 토큰이 통과됨 (위치 {})",
                    idx
                );
            }
        }
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let token = codec().encode(&valid_claims()).unwrap();
        let other = TokenCodec::new(b"another-secret".to_vec());

        assert!(matches!(
            other.decode(&token),
            Err(AppError::InvalidSignature)
        ));
    }

    #[test]
    fn test_valid_json_but_wrong_signature_does_not_leak_payload() {
        let codec = codec();
        let token = codec.encode(&valid_claims()).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        // 서명 세그먼트를 올바른 base64이지만 틀린 값으로 교체
        let forged = format!(
            "{}.{}.{}",
            parts[0],
            parts[1],
            URL_SAFE_NO_PAD.encode([0u8; 32])
        );
        assert!(matches!(
            codec.decode(&forged),
            Err(AppError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_payload_with_valid_signature_is_invalid_payload() {
        let codec = codec();

        // 유효하게 서명되었지만 페이로드가 JSON이 아닌 토큰을 직접 구성
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
        let signing_input = format!("{}.{}", header, payload);
        let signature = codec.sign(signing_input.as_bytes()).unwrap();
        let token = format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature));

        assert!(matches!(
            codec.decode(&token),
            Err(AppError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_decode_ignores_expiry() {
        let codec = codec();
        // 25시간 전에 발급되어 1시간 전에 만료된 토큰
        let expired = claims_at(Utc::now().timestamp() - 25 * 3600);
        let token = codec.encode(&expired).unwrap();

        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded.uid, "kakao_9876543");
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let now = Utc::now().timestamp();

        let mut just_expired = valid_claims();
        just_expired.exp = now - 1;
        let token = codec.encode(&just_expired).unwrap();
        assert!(matches!(
            codec.decode_and_validate(&token),
            Err(AppError::TokenExpired)
        ));

        let mut still_valid = valid_claims();
        still_valid.exp = now + 1;
        let token = codec.encode(&still_valid).unwrap();
        assert!(codec.decode_and_validate(&token).is_ok());
    }
}
