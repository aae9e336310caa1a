//! 사용자 계정 서비스 구현
//!
//! 회원가입과 비밀번호 검증을 담당하는 비즈니스 로직 계층입니다.
//!
//! ## 보안 특성
//!
//! - **bcrypt 해싱**: 고정 cost 8 의 적응형 해시로 비밀번호 저장
//! - **오류 구분**: 미등록 이메일(`NotFound`)과 비밀번호 불일치
//!   (`BadCredentials`)는 서로 다른 에러로 구분됩니다. 잘못된 비밀번호가
//!   `NotFound` 로 보고되는 일은 없습니다.
//!
//! ## 알려진 경쟁
//!
//! 중복 이메일 확인과 삽입은 별개의 저장소 연산이므로, 같은 이메일에 대한
//! 동시 가입 요청이 둘 다 존재 확인을 통과할 수 있습니다. 이 계층은 해당
//! 경쟁을 해결하지 않으며, `users.email` 유니크 인덱스가 최종 방어합니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::RegisterRequest;
use crate::domain::entities::user::User;
use crate::repositories::users::UserStore;

/// 사용자 계정 서비스
///
/// Credential Store 를 [`UserStore`] capability 로 주입받습니다.
pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - email/password/full_name 중 빈 필드 존재
    /// * `AppError::DuplicateEmail` - 동일 이메일의 사용자가 이미 존재
    /// * `AppError::DatabaseError` - 저장소 연산 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let user = user_service.register(RegisterRequest {
    ///     email: "a@b.com".into(),
    ///     password: "pw123456".into(),
    ///     full_name: "A B".into(),
    /// }).await?;
    /// ```
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        if request.email.is_empty() || request.password.is_empty() || request.full_name.is_empty()
        {
            return Err(AppError::ValidationError(
                "All feilds are required".to_string(),
            ));
        }

        if self
            .user_store
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail(
                "Email already taken, try another email or login".to_string(),
            ));
        }

        let password_hash = hash(&request.password, PasswordConfig::BCRYPT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = User::new(request.email, password_hash, request.full_name);
        let created = self.user_store.insert(user).await?;

        log::info!("신규 사용자 등록 완료 - email: {}", created.email);
        Ok(created)
    }

    /// 이메일/비밀번호 자격 증명을 검증하고 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음
    /// * `AppError::BadCredentials` - 비밀번호 해시 불일치
    /// * `AppError::InternalError` - bcrypt 검증 자체의 실패
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Not a existing user, please register".to_string())
            })?;

        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::BadCredentials("Wrong credentials".to_string()));
        }

        Ok(user)
    }
}
