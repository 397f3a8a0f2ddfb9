//! 블로그 서비스 백엔드
//!
//! 사용자, 게시글, 댓글을 다루는 REST API 서비스입니다.
//! JWT 토큰 기반 인증과 페이지네이션, 관계 포함(`joins`) 조회를 제공합니다.
//!
//! # Features
//!
//! - **인증**: 회원가입, 이메일/비밀번호 로그인, 현재 사용자 조회
//! - **CRUD**: `/user`, `/post`, `/comment` 리소스의 목록/조회/생성/수정/삭제
//! - **가드**: 토큰 가드와 자격 증명 가드를 라우트 테이블에서 명시적으로 연결
//! - **저장소**: MongoDB 또는 메모리 저장소 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 명시적 라우트 테이블 + 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (ServiceRegistry로 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Store<E> 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blog_service_backend::core::ServiceRegistry;
//! use blog_service_backend::repositories::Stores;
//!
//! let registry = ServiceRegistry::from_env(Stores::in_memory());
//! let token = registry.auth.register(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
