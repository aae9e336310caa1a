//! 애플리케이션 공통 핵심 모듈
//!
//! 전역 에러 타입 등 계층 간에 공유되는 기반 요소를 제공합니다.

pub mod errors;
