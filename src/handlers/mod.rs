//! HTTP 요청/응답 처리 계층
//!
//! 서비스 계층의 결과를 외부 계약(상태 코드 + JSON 메시지)으로 변환합니다.
//! 모든 에러는 이 경계에서 회수되며, 핸들러를 지나 전파되는 에러는 없습니다.

pub mod auth;
