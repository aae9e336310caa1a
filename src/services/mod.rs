//! 비즈니스 로직 계층
//!
//! 핸들러와 데이터 액세스 계층 사이의 서비스들을 정의합니다.

pub mod auth;
pub mod users;
