//! 데이터 액세스 계층
//!
//! 외부 저장소(MongoDB, Redis)와의 상호작용을 트레이트 뒤에 캡슐화합니다.
//! 서비스 계층은 구체 타입이 아닌 [`users::UserStore`] 와
//! [`tokens::RevocationStore`] 에 의존합니다.

pub mod tokens;
pub mod users;
