//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱/검증 ([`PasswordService`])
//! - HS256 JWT 액세스 토큰 발급/검증 ([`TokenService`])
//! - 회원가입, 자격 증명 검증, 현재 사용자 조회 ([`AuthService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, PasswordService, TokenService};
//!
//! let passwords = Arc::new(PasswordService::new(10));
//! let tokens = Arc::new(TokenService::new("secret", 300));
//! let auth = AuthService::new(stores.users.clone(), passwords, tokens);
//!
//! let token = auth.register(request).await?;
//! ```

pub mod password_service;
pub mod token_service;
pub mod auth_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
pub use auth_service::AuthService;
