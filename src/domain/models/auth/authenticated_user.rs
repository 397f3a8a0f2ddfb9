//! 가드가 요청 컨텍스트에 남기는 인증 주체

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::UserResponse;
use crate::domain::models::token::token::TokenClaims;
use crate::errors::AppError;

/// 토큰 가드가 검증한 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (토큰의 `sub`)
    pub user_id: i64,
    /// 토큰 발급 당시의 이메일
    pub email: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError("Unauthorized".to_string()))),
        }
    }
}

/// 자격 증명 가드가 이메일/비밀번호로 확인한 사용자 (비밀번호 제외)
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUser(pub UserResponse);

impl FromRequest for ValidatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<ValidatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError("Unauthorized".to_string()))),
        }
    }
}
