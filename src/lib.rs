//! JAA 인증 서비스 백엔드
//!
//! JWT 토큰 생명주기와 무효화 프로토콜을 중심으로 한 최소 인증 API 입니다.
//! 회원가입, 로그인, 로그아웃, 액세스 토큰 갱신을 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: 액세스(24시간)/리프레시(4일) 토큰, 독립된 서명 키
//! - **토큰 무효화**: Redis denylist 기반 로그아웃 처리
//! - **MongoDB**: 사용자 자격 증명 영구 저장
//! - **capability 주입**: 저장소를 트레이트로 추상화하여 테스트 더블 지원
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 쿠키 전송
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 발급/검증 + 세션 프로토콜
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / RevocationStore 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jaa_auth_backend::services::auth::{SessionService, TokenService};
//! use jaa_auth_backend::services::users::UserService;
//!
//! let tokens = Arc::new(TokenService::from_env()?);
//! let users = Arc::new(UserService::new(user_store));
//! let sessions = SessionService::new(users, tokens, revocation_store);
//!
//! let pair = sessions.login("a@b.com", "pw123456").await?;
//! let new_access = sessions.refresh_access_token(&pair.refresh_token).await?;
//! ```

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
