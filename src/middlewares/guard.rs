//! 요청 인증 가드
//!
//! 가드는 요청 하나를 검사해 인증 주체(identity)를 돌려주거나 실패합니다.
//! [`RequireGuard`](super::RequireGuard) 미들웨어가 성공한 주체를 request
//! extension에 저장하고, 실패하면 핸들러를 호출하지 않고 401로 응답합니다.
//!
//! | 가드 | 입력 | 저장되는 주체 |
//! |------|------|---------------|
//! | [`TokenGuard`] | `Authorization: Bearer <token>` | [`AuthenticatedUser`] |
//! | [`CredentialGuard`] | JSON 본문 `{ email, password }` | [`ValidatedUser`] |

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web;
use async_trait::async_trait;
use log::debug;
use validator::Validate;

use crate::domain::dto::auth::LoginRequest;
use crate::domain::models::auth::authenticated_user::{AuthenticatedUser, ValidatedUser};
use crate::errors::AppError;
use crate::services::auth::{AuthService, TokenService};

/// 요청 인증 계약
#[async_trait(?Send)]
pub trait Guard: 'static {
    /// 인증 성공 시 request extension에 저장되는 값
    type Identity: Clone + 'static;

    /// 요청을 검사합니다. 본문을 읽는 가드가 있으므로 `&mut`을 받습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 인증 정보가 없거나 유효하지 않음
    async fn authenticate(&self, req: &mut ServiceRequest) -> Result<Self::Identity, AppError>;
}

fn unauthorized() -> AppError {
    AppError::AuthenticationError("Unauthorized".to_string())
}

/// Bearer 토큰 가드
pub struct TokenGuard {
    tokens: Arc<TokenService>,
}

impl TokenGuard {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

#[async_trait(?Send)]
impl Guard for TokenGuard {
    type Identity = AuthenticatedUser;

    async fn authenticate(&self, req: &mut ServiceRequest) -> Result<AuthenticatedUser, AppError> {
        let auth_header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = self.tokens.extract_bearer_token(auth_header)?;
        let claims = self.tokens.verify(token)?;

        debug!("토큰 인증 성공: 사용자 ID {}", claims.sub);
        Ok(AuthenticatedUser::from(claims))
    }
}

/// 이메일/비밀번호 가드 (로그인 라우트 전용)
///
/// 본문을 소비하므로 이 가드 뒤의 핸들러는 [`ValidatedUser`]만 사용해야 합니다.
pub struct CredentialGuard {
    auth: Arc<AuthService>,
}

impl CredentialGuard {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }
}

#[async_trait(?Send)]
impl Guard for CredentialGuard {
    type Identity = ValidatedUser;

    async fn authenticate(&self, req: &mut ServiceRequest) -> Result<ValidatedUser, AppError> {
        let credentials = req
            .extract::<web::Json<LoginRequest>>()
            .await
            .map_err(|e| {
                debug!("로그인 본문 추출 실패: {}", e);
                unauthorized()
            })?
            .into_inner();

        credentials.validate().map_err(|_| unauthorized())?;

        let user = self
            .auth
            .validate(&credentials.email, &credentials.password)
            .await?;

        Ok(ValidatedUser(user))
    }
}
