//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 User, Post, Comment
//! ├── dto       - HTTP 요청/응답 데이터 구조
//! └── models    - JWT 클레임, 인증 주체 등 값 객체
//!      │
//!      ▼
//! Services → Repositories
//! ```
//!
//! 엔티티는 저장 형식(snake_case, `_id`, BSON DateTime)을,
//! DTO는 API 형식(camelCase, ISO-8601 문자열)을 담당합니다.

pub mod entities;
pub mod dto;
pub mod models;
