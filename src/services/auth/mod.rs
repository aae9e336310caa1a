//! 인증 서비스 모듈
//!
//! - [`token_service`] - JWT 발급/검증 (Token Issuer/Verifier)
//! - [`session_service`] - 로그인/로그아웃/갱신 프로토콜 (Session Controller)

pub mod session_service;
pub mod token_service;

pub use session_service::SessionService;
pub use token_service::TokenService;
