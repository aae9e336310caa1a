//! JWT 인증 토큰 구조체 및 페어링된 세트
//!
//! RFC 7519 JWT 표준 클레임과 로그인 시 함께 발급되는 토큰 쌍을 표현합니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID, ObjectId hex)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 로그인 성공 시 클라이언트에게 전달되는 토큰 집합입니다.
/// 하나의 세션은 이 쌍 하나로 정의됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용, 24시간)
    pub access_token: String,
    /// 리프레시 토큰 (액세스 토큰 갱신 전용, 4일)
    pub refresh_token: String,
}
