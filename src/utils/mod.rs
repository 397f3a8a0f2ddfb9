//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 선택적 문자열 정리
//! - [`pagination`] - 페이지 창 및 페이지네이션 메타데이터 계산
//! - [`query_utils`] - 쿼리 값 정수 변환, 관계 포함 맵 생성

pub mod string_utils;
pub mod pagination;
pub mod query_utils;
