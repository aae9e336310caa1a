//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`entities`] - Credential Store 에 영속되는 핵심 엔티티 (User)
//! - [`models`] - 토큰 클레임 등 영속되지 않는 값 객체
//! - [`dto`] - HTTP 요청/응답 계약

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::{LoginRequest, RegisterRequest, UserResponse};
pub use entities::User;
pub use models::{TokenClaims, TokenPair};
