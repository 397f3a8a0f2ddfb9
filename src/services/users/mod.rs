//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (생성, 비밀번호 변경 시)
//! - 이메일 중복 방지
//! - 응답에서 비밀번호 해시 제외
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(stores.clone(), passwords.clone());
//! let user = user_service.get_by_id(1).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
