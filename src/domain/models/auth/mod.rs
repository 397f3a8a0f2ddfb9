//! 인증 주체 모델

pub mod authenticated_user;
