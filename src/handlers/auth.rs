//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회를 처리합니다.
//!
//! | 메서드 | 경로 | 가드 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/auth/register` | 없음 | 201 `{ accessToken }` |
//! | `POST` | `/auth/login` | CredentialGuard | 201 `{ accessToken }` |
//! | `GET` | `/auth/me` | TokenGuard | 200 사용자 |
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::registry::ServiceRegistry;
use crate::domain::dto::auth::RegisterRequest;
use crate::domain::models::auth::authenticated_user::{AuthenticatedUser, ValidatedUser};
use crate::errors::AppError;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/register`
///
/// ```bash
/// curl -X POST http://localhost:8080/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@test.com","password":"222222","name":"User"}'
/// ```
pub async fn register(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token = registry.auth.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(token))
}

/// 로그인 핸들러
///
/// 자격 증명은 `CredentialGuard`가 이미 검증했으므로 토큰만 발급합니다.
///
/// # Endpoint
/// `POST /auth/login`
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    user: ValidatedUser,
) -> Result<HttpResponse, AppError> {
    let token = registry.auth.build_token(&user.0)?;

    log::info!("로그인 성공 - 사용자 ID: {}", user.0.id);
    Ok(HttpResponse::Created().json(token))
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// # Endpoint
/// `GET /auth/me`
pub async fn me(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let current = registry.auth.me(user.user_id).await?;
    Ok(HttpResponse::Ok().json(current))
}
