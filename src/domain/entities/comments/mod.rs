//! 댓글 엔티티 모듈

pub mod comment;
