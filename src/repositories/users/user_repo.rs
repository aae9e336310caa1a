//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **트레이트 기반 주입**: [`UserStore`] 트레이트 뒤에 구현되어
//!   서비스 계층이 테스트 더블로 검증될 수 있습니다
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리
//!
//! 존재 확인과 삽입은 별도 연산이므로 동일 이메일에 대한 동시 가입이
//! 모두 존재 확인을 통과할 수 있습니다. 이 경쟁은 허용된 동작입니다.

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::user::User;

/// 사용자 저장소 인터페이스 (Credential Store)
///
/// Session Controller 가 의존하는 최소 표면입니다: 이메일 조회와 삽입.
/// 프로덕션 구현은 [`UserRepository`], 테스트는 인메모리 더블을 사용합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일 주소로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고, 발급된 ID가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산 중 이 코어가 필요로 하는
/// 조회/삽입만을 제공합니다. 사용자는 가입 이후 수정되지 않습니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 컬렉션 이름
    const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    ///
    /// 서버 시작 시 한 번 호출됩니다. 이미 존재하는 인덱스는 무시됩니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted _id is not an ObjectId".to_string()))?;

        Ok(User {
            id: Some(id),
            ..user
        })
    }
}
