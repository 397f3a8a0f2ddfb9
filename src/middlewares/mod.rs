//! 미들웨어 모듈
//!
//! 라우트 단위로 적용되는 인증 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### RequireGuard
//! - [`Guard`] 하나를 실행해 인증 주체를 request extension에 저장
//! - 실패 시 핸들러를 호출하지 않고 401 응답
//!
//! ### 가드
//! - [`TokenGuard`] - Bearer JWT 검증, `AuthenticatedUser` 저장
//! - [`CredentialGuard`] - 로그인 본문 검증, `ValidatedUser` 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::{RequireGuard, TokenGuard};
//!
//! web::scope("/comment")
//!     .wrap(RequireGuard::new(TokenGuard::new(registry.tokens.clone())))
//!     .route("", web::get().to(find_comments))
//! ```

pub mod auth_middleware;
pub mod guard;
mod auth_inner;

pub use auth_middleware::RequireGuard;
pub use guard::{CredentialGuard, Guard, TokenGuard};
