//! API 라우트 설정 모듈
//!
//! 인증 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
//!
//! # Available Routes
//!
//! - `POST /register` - 회원가입
//! - `POST /login` - 로그인
//! - `POST /logout` - 로그아웃
//! - `POST /refresh` - 액세스 토큰 갱신
//! - `GET /health` - 서비스 상태 확인
//!
//! # Examples
//!
//! ```bash
//! curl -X POST http://localhost:8080/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"a@b.com","password":"pw123456","full_name":"A B"}'
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Authentication routes
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::auth::refresh);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "jaa_auth_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "revocation_store": "Redis"
        }
    }))
}
