//! # 토큰 무효화 리포지토리
//!
//! Redis 를 denylist 로 사용하여 무효화된 토큰을 관리합니다.
//!
//! ## 저장 형식
//!
//! 무효화 항목은 토큰의 원문 문자열을 키로, 같은 문자열을 값으로 하는
//! 매핑입니다. 실질적으로 집합(set)으로 동작합니다. 이 시스템은 항목에
//! TTL 을 설정하지 않으므로, 외부에서 정리하기 전까지 항목이 유지됩니다.
//!
//! 로그아웃 시 기록되고 갱신 시 조회되며, 이 시스템이 명시적으로
//! 삭제하는 일은 없습니다.

use async_trait::async_trait;
use std::sync::Arc;

use crate::caching::redis::RedisClient;
use crate::core::errors::{AppError, AppResult};

/// 토큰 무효화 저장소 인터페이스 (Revocation Store)
///
/// Session Controller 에 주입되는 capability 입니다. 전역 클라이언트 핸들
/// 대신 트레이트로 추상화하여 테스트 더블 주입이 가능합니다.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// 토큰 원문을 무효화 목록에 기록합니다.
    ///
    /// 서명이나 만료 검증 없이 무조건 기록합니다. 이미 기록된 토큰을
    /// 다시 기록해도 조용히 성공합니다 (멱등).
    async fn revoke(&self, token: &str) -> AppResult<()>;

    /// 토큰이 무효화 목록에 있는지 확인합니다.
    async fn is_revoked(&self, token: &str) -> AppResult<bool>;
}

/// Redis 기반 무효화 저장소 구현
pub struct RevokedTokenRepository {
    redis: Arc<RedisClient>,
}

impl RevokedTokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl RevocationStore for RevokedTokenRepository {
    async fn revoke(&self, token: &str) -> AppResult<()> {
        self.redis
            .set(token, token)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        let entry = self
            .redis
            .get(token)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(entry.is_some())
    }
}
