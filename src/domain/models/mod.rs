//! 도메인 모델
//!
//! 영속되지 않는 값 객체들(토큰 클레임과 토큰 쌍)을 정의합니다.

pub mod token;

pub use token::{TokenClaims, TokenPair};
