//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반 로컬 인증 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// Credential Store(MongoDB `users` 컬렉션)에 저장되는 도메인 엔티티입니다.
/// 가입 시 생성되며, 이 코어에서는 이후 수정되거나 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 전체 이름
    pub full_name: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// `password_hash` 는 이미 bcrypt 로 해시된 값이어야 합니다.
    pub fn new(email: String, password_hash: String, full_name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            full_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            "a@b.com".to_string(),
            "$2b$08$hash".to_string(),
            "A B".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_id_string_roundtrip() {
        let mut user = User::new(
            "a@b.com".to_string(),
            "$2b$08$hash".to_string(),
            "A B".to_string(),
        );
        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
