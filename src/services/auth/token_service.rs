//! JWT 토큰 발급/검증 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 액세스/리프레시 토큰 발급과 검증을 담당합니다.
//! 두 토큰 종류는 서로 다른 비밀키로 서명되며, 유효 기간도 독립적입니다
//! (액세스 24시간, 리프레시 4일).
//!
//! 이 서비스는 암호학적 유효성(서명 + 만료)만 판단합니다. 무효화 목록
//! 조회는 호출자의 별도 단계입니다. 두 관심사를 분리하여 각각 독립적으로
//! 테스트할 수 있게 유지합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 발급/검증 서비스
///
/// 두 서명 비밀키를 생성 시점에 한 번 로드하여 보관합니다.
/// 키 누락은 [`TokenService::from_env`] 에서 즉시 실패하며,
/// 요청 처리 중에 키 때문에 실패하는 일은 없습니다.
pub struct TokenService {
    /// 액세스 토큰 서명 비밀키
    access_secret: String,
    /// 리프레시 토큰 서명 비밀키 (액세스 키와 반드시 구분)
    refresh_secret: String,
}

impl TokenService {
    /// 명시적 비밀키로 서비스를 생성합니다.
    ///
    /// 테스트에서 임의의 키를 주입할 때 사용합니다.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
        }
    }

    /// 환경 변수에서 비밀키를 읽어 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 두 키 중 하나라도 설정되지 않은 경우.
    ///   서버 부팅 단계에서 호출되므로 곧바로 시작 실패로 이어집니다.
    pub fn from_env() -> AppResult<Self> {
        let access_secret = JwtConfig::access_secret().map_err(|_| {
            AppError::InternalError("JWT_ACCESS_TOKEN_SECRET_KEY must be set".to_string())
        })?;
        let refresh_secret = JwtConfig::refresh_secret().map_err(|_| {
            AppError::InternalError("JWT_REFRESH_TOKEN_SECRET_KEY must be set".to_string())
        })?;

        Ok(Self::new(access_secret, refresh_secret))
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// 발급 시점부터 24시간 동안 유효합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰을 발급받을 사용자 ID (ObjectId hex)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 직렬화/서명 실패
    pub fn generate_access_token(&self, user_id: &str) -> AppResult<String> {
        self.sign(
            user_id,
            Duration::hours(JwtConfig::ACCESS_TOKEN_TTL_HOURS),
            &self.access_secret,
        )
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 발급 시점부터 4일 동안 유효하며, 액세스 토큰과 다른 키로 서명됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 직렬화/서명 실패
    pub fn generate_refresh_token(&self, user_id: &str) -> AppResult<String> {
        self.sign(
            user_id,
            Duration::days(JwtConfig::REFRESH_TOKEN_TTL_DAYS),
            &self.refresh_secret,
        )
    }

    /// 액세스 토큰의 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 잘못된 형식, 서명 불일치, 만료
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        Self::verify(token, &self.access_secret)
    }

    /// 리프레시 토큰의 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// 무효화 목록은 조회하지 않습니다. 그 단계는 호출자
    /// ([`SessionService`](super::session_service::SessionService))의 책임입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 잘못된 형식, 서명 불일치, 만료
    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        Self::verify(token, &self.refresh_secret)
    }

    fn sign(&self, user_id: &str, ttl: Duration, secret: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명/만료 검증.
    ///
    /// 잘못된 형식, 서명 불일치, 만료는 모두 하나의 `InvalidToken` 으로
    /// 수렴하되, jsonwebtoken 의 원본 실패 메시지를 보존합니다.
    fn verify(token: &str, secret: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("access-test-secret", "refresh-test-secret")
    }

    /// 과거에 만료된 토큰을 직접 서명하여 생성한다.
    /// Validation 기본 leeway(60초)를 넘기기 위해 충분히 과거로 설정한다.
    fn expired_token(secret: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "64f000000000000000000001".to_string(),
            iat: now - 10_000,
            exp: now - 5_000,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_access_token_roundtrip_recovers_user_id() {
        let svc = service();
        let token = svc.generate_access_token("64f000000000000000000001").unwrap();
        let claims = svc.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, "64f000000000000000000001");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_roundtrip_recovers_user_id() {
        let svc = service();
        let token = svc.generate_refresh_token("64f000000000000000000001").unwrap();
        let claims = svc.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, "64f000000000000000000001");
    }

    #[test]
    fn test_access_and_refresh_tokens_are_distinct() {
        let svc = service();
        let access = svc.generate_access_token("u1").unwrap();
        let refresh = svc.generate_refresh_token("u1").unwrap();

        assert_ne!(access, refresh);
    }

    #[test]
    fn test_refresh_token_rejected_by_access_verifier() {
        // 서로 다른 비밀키로 서명되므로 교차 검증은 실패해야 한다
        let svc = service();
        let refresh = svc.generate_refresh_token("u1").unwrap();

        let err = svc.verify_access_token(&refresh).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[test]
    fn test_expiry_windows_follow_policy() {
        let svc = service();
        let access = svc.verify_access_token(&svc.generate_access_token("u1").unwrap()).unwrap();
        let refresh = svc.verify_refresh_token(&svc.generate_refresh_token("u1").unwrap()).unwrap();

        assert_eq!(access.exp - access.iat, 24 * 3600);
        assert_eq!(refresh.exp - refresh.iat, 4 * 24 * 3600);
    }

    #[test]
    fn test_expired_refresh_token_is_invalid() {
        let svc = service();
        let token = expired_token("refresh-test-secret");

        let err = svc.verify_refresh_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let svc = service();

        let err = svc.verify_refresh_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let svc = service();
        let token = svc.generate_access_token("u1").unwrap();
        let mut tampered = token[..token.len() - 2].to_string();
        tampered.push_str("xx");

        let err = svc.verify_access_token(&tampered).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }
}
