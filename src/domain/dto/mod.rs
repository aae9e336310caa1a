//! 데이터 전송 객체 (Request/Response)
//!
//! HTTP 계층과 서비스 계층 사이의 API 계약을 정의합니다.

pub mod auth;

pub use auth::{LoginRequest, RegisterRequest, UserResponse};
