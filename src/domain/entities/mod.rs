//! 핵심 도메인 엔티티
//!
//! Credential Store 에 영속되는 비즈니스 객체들을 정의합니다.

pub mod user;

pub use user::User;
