//! 캐시/키-값 저장소 계층
//!
//! 토큰 무효화 denylist 의 백엔드인 Redis 클라이언트를 제공합니다.

pub mod redis;
