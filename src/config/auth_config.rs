//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 비밀번호 해싱 관련 설정을 관리하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_TOKEN_SECRET_KEY="your-access-token-secret"
//! export JWT_REFRESH_TOKEN_SECRET_KEY="your-refresh-token-secret"
//! ```
//!
//! 두 비밀키는 반드시 서로 다른 값이어야 하며, 둘 중 하나라도 없으면
//! 서버 시작 시점에 즉시 실패합니다 (요청 처리 중 패닉 금지).
//!
//! ## 고정 정책
//!
//! 토큰 유효 기간과 bcrypt cost 는 환경 변수로 조정할 수 없는 고정값입니다:
//!
//! - 액세스 토큰: 발급 시점부터 24시간
//! - 리프레시 토큰: 발급 시점부터 4일
//! - bcrypt cost: 8

use std::env;

/// JWT 토큰 서명 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 독립된 비밀키로 서명됩니다.
/// 한쪽 키가 유출되어도 다른 토큰 종류는 영향을 받지 않습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 유효 기간 (시간)
    pub const ACCESS_TOKEN_TTL_HOURS: i64 = 24;

    /// 리프레시 토큰 유효 기간 (일)
    pub const REFRESH_TOKEN_TTL_DAYS: i64 = 4;

    /// 액세스 토큰 서명 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// `JWT_ACCESS_TOKEN_SECRET_KEY` 환경 변수가 없으면 에러를 반환합니다.
    /// 서버 시작 시 [`TokenService::from_env`](crate::services::auth::TokenService::from_env)
    /// 에서 한 번만 읽으므로, 누락은 즉시 부팅 실패로 이어집니다.
    pub fn access_secret() -> Result<String, env::VarError> {
        env::var("JWT_ACCESS_TOKEN_SECRET_KEY")
    }

    /// 리프레시 토큰 서명 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// `JWT_REFRESH_TOKEN_SECRET_KEY` 환경 변수가 없으면 에러를 반환합니다.
    pub fn refresh_secret() -> Result<String, env::VarError> {
        env::var("JWT_REFRESH_TOKEN_SECRET_KEY")
    }

    /// 액세스 토큰 유효 기간 (초)
    ///
    /// 쿠키 max-age 설정에 사용됩니다.
    pub fn access_ttl_seconds() -> i64 {
        Self::ACCESS_TOKEN_TTL_HOURS * 3600
    }

    /// 리프레시 토큰 유효 기간 (초)
    pub fn refresh_ttl_seconds() -> i64 {
        Self::REFRESH_TOKEN_TTL_DAYS * 24 * 3600
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost (고정값)
    ///
    /// 환경별로 조정하지 않습니다. 테스트에서도 동일한 값을 사용합니다.
    pub const BCRYPT_COST: u32 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_constants() {
        assert_eq!(JwtConfig::ACCESS_TOKEN_TTL_HOURS, 24);
        assert_eq!(JwtConfig::REFRESH_TOKEN_TTL_DAYS, 4);
        assert_eq!(JwtConfig::access_ttl_seconds(), 86_400);
        assert_eq!(JwtConfig::refresh_ttl_seconds(), 345_600);
    }

    #[test]
    fn test_bcrypt_cost_is_fixed() {
        assert_eq!(PasswordConfig::BCRYPT_COST, 8);
    }
}
