//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceRegistry**: 시작 시 한 번 생성되는 서비스 묶음
//! - **명시적 주입**: 모든 의존성은 생성자 인자로 전달
//! - **공유**: `web::Data<ServiceRegistry>`로 핸들러와 라우트 테이블에 제공
//!
//! 에러 타입은 [`crate::errors`]에 있습니다.

pub mod registry;

pub use registry::ServiceRegistry;
