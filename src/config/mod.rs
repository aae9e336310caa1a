//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩 관련 설정
//! - [`auth_config`] - JWT 서명 키, 토큰 유효 기간, bcrypt cost
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_TOKEN_SECRET_KEY="access-secret"
//! export JWT_REFRESH_TOKEN_SECRET_KEY="refresh-secret"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="jaa_auth_dev"
//! export REDIS_URL="redis://localhost:6379"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
