//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! JSON 필드명은 모두 camelCase(`accessToken`, `userId`, `createdAt`)입니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 회원가입/로그인 요청, 토큰 응답
//! - [`users`], [`posts`], [`comments`] - 리소스별 생성/수정 요청과 응답
//! - [`pagination`] - 목록 응답 봉투 `{ data, pagination }`
//! - [`query`] - 목록 조회 쿼리 (`page`, `pageSize`, `joins`)
//!
//! 요청 DTO는 `validator`의 `Validate`를 구현하며, 핸들러에서 검증 실패를
//! `AppError::ValidationError`로 변환합니다.
//!
//! ```rust,ignore
//! payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//! ```

pub mod auth;
pub mod users;
pub mod posts;
pub mod comments;
pub mod pagination;
pub mod query;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use users::{UserCreateRequest, UserResponse, UserUpdateRequest};
pub use posts::{PostCreateRequest, PostResponse, PostUpdateRequest};
pub use comments::{CommentCreateRequest, CommentResponse, CommentUpdateRequest};
pub use pagination::{Paginated, PaginationMeta};
pub use query::FindManyQuery;
