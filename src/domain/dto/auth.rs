//! # 인증 요청/응답 DTO
//!
//! 회원가입과 로그인 엔드포인트의 HTTP 요청/응답 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! 세 필드(email / password / full_name) 모두 비어 있지 않아야 합니다.
//! 이메일 형식이나 비밀번호 복잡성은 검사하지 않습니다. 외부 계약은
//! 필드 존재 여부만 요구합니다. 중복 이메일 여부는 서비스 계층에서 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user::User;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "a@b.com",
///   "password": "pw123456",
///   "full_name": "A B"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (시스템 내 유일성은 서비스 계층에서 검증)
    #[validate(length(min = 1, message = "All feilds are required"))]
    pub email: String,

    /// 계정 비밀번호 (해싱 후 저장되므로 평문으로 유지하지 않음)
    #[validate(length(min = 1, message = "All feilds are required"))]
    pub password: String,

    /// 사용자 전체 이름
    #[validate(length(min = 1, message = "All feilds are required"))]
    pub full_name: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 가입 시 사용한 이메일 주소
    #[validate(length(min = 1, message = "All feilds are required"))]
    pub email: String,

    /// 계정 비밀번호 (평문, 서버에서 해시와 비교)
    #[validate(length(min = 1, message = "All feilds are required"))]
    pub password: String,
}

/// 사용자 정보 응답 DTO
///
/// 비밀번호 해시를 제외한 공개 가능한 사용자 정보만 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 사용자 ID (ObjectId hex)
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 전체 이름
    pub full_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}
