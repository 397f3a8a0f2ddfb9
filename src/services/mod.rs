//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성(저장소 묶음, 해셔, 토큰 서비스)을 받으며,
//! `core::registry::ServiceRegistry`가 애플리케이션 시작 시 한 번 조립합니다.
//!
//! # Features
//!
//! - 회원가입, 로그인 자격 증명 검증, JWT 발급 ([`auth`])
//! - 사용자/게시글/댓글 CRUD와 페이지네이션 ([`users`], [`posts`], [`comments`])
//! - 목록 조회 시 관계 포함 (`joins`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::posts::PostService;
//!
//! let post_service = PostService::new(stores.clone());
//! let page = post_service.find_all(&query).await?;
//! ```

pub mod auth;
pub mod users;
pub mod posts;
pub mod comments;

mod relations;
