//! # Application Error Handling System
//!
//! 인증 백엔드의 통합 에러 처리 시스템입니다.
//! `thiserror` 기반의 에러 열거형과 `actix_web::ResponseError` 구현을 결합하여
//! 모든 실패가 핸들러 경계에서 일관된 HTTP 응답으로 변환되도록 보장합니다.
//!
//! ## 설계 원칙
//!
//! - **도메인별 분류**: 검증, 인증, 토큰 생명주기, 인프라 에러를 구분
//! - **자동 HTTP 변환**: 모든 에러가 상태 코드 + `{"msg": ...}` JSON으로 매핑
//! - **내부 정보 보호**: 5xx 에러는 서버 로그에 상세히 기록하고
//!   클라이언트에는 일반적인 메시지만 반환
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락 |
//! | `DuplicateEmail` | 400 Bad Request | 이미 등록된 이메일 |
//! | `NotFound` | 400 Bad Request | 미등록 사용자 로그인 시도 |
//! | `BadCredentials` | 400 Bad Request | 비밀번호 불일치 |
//! | `Unauthorized` | 400 Bad Request | 로그아웃 시 토큰 쿠키 누락 |
//! | `InvalidToken` | 401 Unauthorized | 서명/만료 검증 실패 |
//! | `SessionTerminated` | 401 Unauthorized | 무효화된 리프레시 토큰 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 무효화 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 사용자 대면 실패(400번대)는 외부 계약에 맞춰 모두 400으로 응답합니다.
//! 404나 409 는 사용하지 않습니다. 갱신 엔드포인트의 `SessionTerminated` 는
//! 핸들러에서 별도로 처리되며(200 응답 유지), 여기의 401 매핑은
//! 핸들러를 거치지 않고 전파된 경우의 안전망입니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 토큰 생명주기와 세션 프로토콜에서 발생할 수 있는 모든 실패를 포괄합니다.
/// `thiserror` 로 `Error` trait 을 구현하고, `actix_web::ResponseError` 로
/// HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 입력 필드 누락
    ///
    /// email / password / full_name 중 하나라도 비어 있으면 발생합니다.
    #[error("{0}")]
    ValidationError(String),

    /// 이미 등록된 이메일로 회원가입 시도
    ///
    /// 존재 확인과 삽입 사이의 경쟁은 email 유니크 인덱스가 최종 방어합니다.
    #[error("{0}")]
    DuplicateEmail(String),

    /// 해당 이메일의 사용자가 존재하지 않음
    #[error("{0}")]
    NotFound(String),

    /// 비밀번호 해시 불일치
    #[error("{0}")]
    BadCredentials(String),

    /// 로그아웃 요청에 토큰 쿠키가 없음
    #[error("{0}")]
    Unauthorized(String),

    /// 토큰의 암호학적 검증 실패
    ///
    /// 잘못된 형식, 서명 불일치, 만료가 모두 이 하나의 종류로 수렴합니다.
    /// 원본 jsonwebtoken 실패 메시지는 문자열에 보존됩니다.
    #[error("{0}")]
    InvalidToken(String),

    /// 서명은 유효하지만 무효화 저장소에 기록된 리프레시 토큰
    ///
    /// 클라이언트는 재로그인해야 합니다.
    #[error("{0}")]
    SessionTerminated(String),

    /// MongoDB 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 무효화 저장소 연산 실패
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 예상치 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인프라 에러(5xx) 여부를 반환합니다.
    ///
    /// 5xx 에러는 상세 내용을 서버 로그에만 남기고
    /// 클라이언트에는 일반 메시지를 반환합니다.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"msg": "..."}` 형식을 따르며, 5xx 의 경우
    /// `{"error": "...", "msg": "..."}` 로 실패 범주를 함께 표시합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::DuplicateEmail(_)
            | AppError::NotFound(_)
            | AppError::BadCredentials(_)
            | AppError::Unauthorized(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken(_) | AppError::SessionTerminated(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if self.is_internal() {
            // 상세 내용은 서버 로그에만 남긴다
            log::error!("internal failure: {}", self);
            return actix_web::HttpResponse::build(status).json(serde_json::json!({
                "error": "Internal server error",
                "msg": "Something went wrong, please try again later"
            }));
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "msg": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
