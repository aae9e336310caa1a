//! 세션 프로토콜 오케스트레이션 서비스
//!
//! 로그인/로그아웃/갱신의 상태 전이를 담당합니다. 세션은 사용자 단위가
//! 아니라 토큰 쌍 단위입니다. 한 사용자가 여러 리프레시 토큰을 동시에
//! 보유할 수 있으며, 단일 세션 강제는 없습니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Anonymous ──login──▶ Authenticated ──logout──▶ LoggedOut
//!                        │       ▲
//!                        └refresh┘  (새 액세스 토큰, 리프레시 토큰은 유지)
//! ```
//!
//! ## 갱신 프로토콜의 두 단계
//!
//! 1. 암호학적 검증 (서명 + 만료): [`TokenService`] 담당
//! 2. 무효화 목록 조회: [`RevocationStore`] 담당
//!
//! 두 단계는 의도적으로 분리되어 있습니다. 만료된 토큰은 무효화 목록
//! 상태와 무관하게 1단계에서 거부됩니다.
//!
//! ## 알려진 간극 (의도적으로 유지)
//!
//! 로그아웃은 액세스 토큰도 무효화 목록에 기록하지만, 어떤 흐름도 액세스
//! 토큰을 무효화 목록과 대조하지 않습니다. 로그아웃된 액세스 토큰은 자연
//! 만료(24시간)까지 서명 검증을 통과합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenPair;
use crate::repositories::tokens::RevocationStore;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

/// 세션 컨트롤러
///
/// 사용자 서비스, 토큰 서비스, 무효화 저장소 capability 를 주입받아
/// 세션 프로토콜을 조율합니다. 저장소 연산은 각각 단일 읽기 또는 단일
/// 쓰기이며, 저장소 간 원자성은 제공하지 않습니다.
pub struct SessionService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
    revoked: Arc<dyn RevocationStore>,
}

impl SessionService {
    pub fn new(
        users: Arc<UserService>,
        tokens: Arc<TokenService>,
        revoked: Arc<dyn RevocationStore>,
    ) -> Self {
        Self {
            users,
            tokens,
            revoked,
        }
    }

    /// 자격 증명을 검증하고 새 토큰 쌍을 발급합니다.
    ///
    /// 액세스/리프레시 토큰은 독립된 키와 독립된 만료로 발급됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 미등록 이메일
    /// * `AppError::BadCredentials` - 비밀번호 불일치
    /// * `AppError::InternalError` - 토큰 서명 실패, ID 누락
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let user = self.users.verify_password(email, password).await?;

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let access_token = self.tokens.generate_access_token(&user_id)?;
        let refresh_token = self.tokens.generate_refresh_token(&user_id)?;

        log::info!("로그인 성공 - email: {}, user_id: {}", email, user_id);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 두 토큰의 원문을 무효화 목록에 기록합니다.
    ///
    /// 서명이나 만료를 먼저 확인하지 않습니다. 형식이 잘못된 문자열도
    /// 그대로 기록됩니다. 검증 단계가 어차피 거부하므로 무해하며, 덕분에
    /// 이 연산은 "잘못된" 토큰으로는 실패하지 않습니다 (토큰 누락 거부는
    /// HTTP 계층의 책임). 이미 기록된 토큰을 다시 기록해도 조용히
    /// 성공합니다 (멱등).
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 무효화 저장소 쓰기 실패
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        self.revoked.revoke(access_token).await?;
        self.revoked.revoke(refresh_token).await?;

        Ok(())
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 1단계: 암호학적 검증. 실패하면 검증기의 실패 사유가 담긴
    /// `InvalidToken` 이 그대로 전파됩니다.
    /// 2단계: 무효화 목록 조회. 기록되어 있으면 `SessionTerminated`.
    ///
    /// 성공 시 리프레시 토큰은 회전되지 않습니다. 자연 만료나 명시적
    /// 무효화 전까지 계속 재사용할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명/만료 검증 실패
    /// * `AppError::SessionTerminated` - 무효화된 토큰, 재로그인 필요
    /// * `AppError::RedisError` - 무효화 저장소 조회 실패
    pub async fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String> {
        let claims = self.tokens.verify_refresh_token(refresh_token)?;

        if self.revoked.is_revoked(refresh_token).await? {
            return Err(AppError::SessionTerminated(
                "please login again, refreshed token also expried".to_string(),
            ));
        }

        self.tokens.generate_access_token(&claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use crate::domain::dto::auth::RegisterRequest;
    use crate::domain::entities::user::User;
    use crate::repositories::users::UserStore;

    /// Credential Store 인메모리 더블
    #[derive(Default)]
    struct InMemoryUserStore {
        users: Mutex<HashMap<String, User>>,
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(email).cloned())
        }

        async fn insert(&self, user: User) -> AppResult<User> {
            let stored = User {
                id: Some(ObjectId::new()),
                ..user
            };
            self.users
                .lock()
                .unwrap()
                .insert(stored.email.clone(), stored.clone());
            Ok(stored)
        }
    }

    /// Revocation Store 인메모리 더블
    #[derive(Default)]
    struct InMemoryRevocationStore {
        revoked: Mutex<HashSet<String>>,
    }

    #[async_trait]
    impl RevocationStore for InMemoryRevocationStore {
        async fn revoke(&self, token: &str) -> AppResult<()> {
            self.revoked.lock().unwrap().insert(token.to_string());
            Ok(())
        }

        async fn is_revoked(&self, token: &str) -> AppResult<bool> {
            Ok(self.revoked.lock().unwrap().contains(token))
        }
    }

    struct Fixture {
        users: Arc<UserService>,
        tokens: Arc<TokenService>,
        revoked: Arc<InMemoryRevocationStore>,
        sessions: SessionService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryUserStore::default());
        let users = Arc::new(UserService::new(store));
        let tokens = Arc::new(TokenService::new("access-test-secret", "refresh-test-secret"));
        let revoked = Arc::new(InMemoryRevocationStore::default());
        let sessions = SessionService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            Arc::clone(&revoked) as Arc<dyn RevocationStore>,
        );

        Fixture {
            users,
            tokens,
            revoked,
            sessions,
        }
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "a@b.com".to_string(),
            password: "pw123456".to_string(),
            full_name: "A B".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_then_login_returns_two_distinct_tokens() {
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();

        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[actix_web::test]
    async fn test_register_rejects_empty_fields() {
        let fx = fixture();
        let mut req = register_request();
        req.full_name = "".to_string();

        let err = fx.users.register(req).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_rejected() {
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();

        let err = fx.users.register(register_request()).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail(_)));
    }

    #[actix_web::test]
    async fn test_wrong_password_is_bad_credentials_never_not_found() {
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();

        let err = fx.sessions.login("a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::BadCredentials(_)));
    }

    #[actix_web::test]
    async fn test_unknown_email_is_not_found() {
        let fx = fixture();

        let err = fx.sessions.login("nobody@b.com", "pw123456").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_logout_is_idempotent() {
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();
        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();

        fx.sessions
            .logout(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();
        // 두 번째 호출도 조용히 성공해야 한다
        fx.sessions
            .logout(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_logout_records_garbage_tokens_without_error() {
        // 형식이 잘못된 토큰도 검증 없이 그대로 기록된다
        let fx = fixture();

        fx.sessions.logout("garbage", "also-garbage").await.unwrap();

        assert!(fx.revoked.is_revoked("garbage").await.unwrap());
        assert!(fx.revoked.is_revoked("also-garbage").await.unwrap());
    }

    #[actix_web::test]
    async fn test_refresh_after_logout_is_session_terminated() {
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();
        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();

        fx.sessions
            .logout(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();

        let err = fx
            .sessions
            .refresh_access_token(&pair.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SessionTerminated(_)));
    }

    #[actix_web::test]
    async fn test_expired_refresh_token_is_invalid_regardless_of_revocation() {
        use chrono::Utc;
        use jsonwebtoken::{encode, EncodingKey, Header};

        use crate::domain::models::token::TokenClaims;

        let fx = fixture();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: ObjectId::new().to_hex(),
            iat: now - 10_000,
            exp: now - 5_000,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("refresh-test-secret".as_ref()),
        )
        .unwrap();

        // 무효화 목록에도 올려두어 1단계가 2단계보다 먼저임을 확인한다
        fx.revoked.revoke(&expired).await.unwrap();

        let err = fx.sessions.refresh_access_token(&expired).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[actix_web::test]
    async fn test_refresh_issues_access_token_for_same_user() {
        let fx = fixture();
        let user = fx.users.register(register_request()).await.unwrap();
        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();

        let new_access = fx
            .sessions
            .refresh_access_token(&pair.refresh_token)
            .await
            .unwrap();

        let claims = fx.tokens.verify_access_token(&new_access).unwrap();
        assert_eq!(claims.sub, user.id_string().unwrap());
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_rotated() {
        // 원본 리프레시 토큰은 갱신 후에도 계속 사용 가능해야 한다
        let fx = fixture();
        fx.users.register(register_request()).await.unwrap();
        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();

        fx.sessions
            .refresh_access_token(&pair.refresh_token)
            .await
            .unwrap();
        fx.sessions
            .refresh_access_token(&pair.refresh_token)
            .await
            .unwrap();
    }

    /// 전체 시나리오: 가입 → 중복 가입 → 오답 로그인 → 로그인 →
    /// 로그아웃 → 무효화된 토큰으로 갱신 시도
    #[actix_web::test]
    async fn test_full_session_lifecycle_scenario() {
        let fx = fixture();

        fx.users.register(register_request()).await.unwrap();

        let dup = fx.users.register(register_request()).await.unwrap_err();
        assert!(matches!(dup, AppError::DuplicateEmail(_)));

        let bad = fx.sessions.login("a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(bad, AppError::BadCredentials(_)));

        let pair = fx.sessions.login("a@b.com", "pw123456").await.unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());

        fx.sessions
            .logout(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();

        let terminated = fx
            .sessions
            .refresh_access_token(&pair.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(terminated, AppError::SessionTerminated(_)));
    }
}
