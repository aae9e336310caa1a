//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, 토큰 갱신 엔드포인트를 처리하는 핸들러입니다.
//! 토큰은 응답 본문과 쿠키 두 채널로 모두 전달됩니다 (클라이언트 유연성을
//! 위한 의도적 중복).
//!
//! # Endpoints
//!
//! - `POST /register` - 회원가입 (본문: email/password/full_name)
//! - `POST /login` - 로그인, 토큰 쌍 발급 + 쿠키 설정
//! - `POST /logout` - 쿠키의 두 토큰을 무효화 목록에 기록
//! - `POST /refresh` - 리프레시 토큰 쿠키로 새 액세스 토큰 발급
//!
//! # Cookies
//!
//! - `JAA_access_token` - max-age 24시간 (토큰 유효 기간과 동일)
//! - `JAA_refresh_token` - max-age 4일

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest, UserResponse};
use crate::services::auth::SessionService;
use crate::services::users::UserService;

/// 액세스 토큰 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "JAA_access_token";
/// 리프레시 토큰 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "JAA_refresh_token";

fn access_token_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, token.to_string())
        .path("/")
        .max_age(CookieDuration::seconds(JwtConfig::access_ttl_seconds()))
        .finish()
}

fn refresh_token_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, token.to_string())
        .path("/")
        .max_age(CookieDuration::seconds(JwtConfig::refresh_ttl_seconds()))
        .finish()
}

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /register`
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::ValidationError("All feilds are required".to_string()))?;

    let user = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Registration successful",
        "user": UserResponse::from(&user)
    })))
}

/// 로그인 핸들러
///
/// 성공 시 토큰 쌍을 본문으로 반환하고, 각 토큰의 유효 기간과 동일한
/// max-age 의 쿠키를 함께 설정합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    sessions: web::Data<SessionService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::ValidationError("All feilds are required".to_string()))?;

    let pair = sessions.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok()
        .cookie(access_token_cookie(&pair.access_token))
        .cookie(refresh_token_cookie(&pair.refresh_token))
        .json(json!({
            "msg": "Login success",
            "accessToken": pair.access_token,
            "refreshToken": pair.refresh_token
        })))
}

/// 로그아웃 핸들러
///
/// 두 토큰 쿠키를 읽어 원문 그대로 무효화 목록에 기록합니다.
/// 쿠키 중 하나라도 없으면 400 으로 거부하고, 존재하기만 하면 내용의
/// 유효성과 무관하게 기록합니다.
///
/// # Endpoint
/// `POST /logout`
#[post("/logout")]
pub async fn logout(
    sessions: web::Data<SessionService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let access = req
        .cookie(ACCESS_TOKEN_COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized!".to_string()))?;
    let refresh_cookie = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized!".to_string()))?;

    sessions
        .logout(access.value(), refresh_cookie.value())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "msg": "Logout successful!" })))
}

/// 액세스 토큰 갱신 핸들러
///
/// 리프레시 토큰 쿠키를 검증한 뒤 무효화 목록을 조회하고,
/// 통과하면 새 액세스 토큰을 발급하여 쿠키를 갱신합니다.
/// 리프레시 토큰 자체는 회전되지 않습니다.
///
/// 무효화된 토큰 분기는 실패임에도 200 상태 코드로 응답합니다.
/// 기존 클라이언트가 이 동작에 의존하고 있어 그대로 유지합니다.
///
/// # Endpoint
/// `POST /refresh`
#[post("/refresh")]
pub async fn refresh(
    sessions: web::Data<SessionService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let refresh_cookie = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .ok_or_else(|| AppError::InvalidToken("jwt must be provided".to_string()))?;

    match sessions.refresh_access_token(refresh_cookie.value()).await {
        Ok(new_access_token) => Ok(HttpResponse::Ok()
            .cookie(access_token_cookie(&new_access_token))
            .json(json!({
                "msg": "Token generated",
                "newAccessToken": new_access_token
            }))),
        Err(AppError::SessionTerminated(msg)) => Ok(HttpResponse::Ok().json(json!({ "msg": msg }))),
        Err(e) => Err(e),
    }
}
