//! # Domain Models
//!
//! 영속되지 않는 도메인 값 객체들입니다.
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 가드가 요청 컨텍스트에 저장하는 인증 주체와 추출자

pub mod token;
pub mod auth;

pub use auth::authenticated_user::{AuthenticatedUser, ValidatedUser};
pub use token::token::TokenClaims;
