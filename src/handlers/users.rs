//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트입니다. 모든 라우트는 `TokenGuard` 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/user` | 목록 (`page`, `pageSize`) | 200 OK |
//! | `POST` | `/user` | 생성 | 201 Created |
//! | `GET` | `/user/{id}` | 조회 | 200 OK |
//! | `PUT` | `/user/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/user/{id}` | 삭제 (삭제된 사용자 반환) | 200 OK |
//!
//! ## 에러 응답
//!
//! ```json
//! {
//!   "error": "not_found",
//!   "message": "User not found"
//! }
//! ```

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::registry::ServiceRegistry;
use crate::domain::dto::query::FindManyQuery;
use crate::domain::dto::users::{UserCreateRequest, UserUpdateRequest};
use crate::errors::AppError;

/// `GET /user`
pub async fn find_users(
    registry: web::Data<ServiceRegistry>,
    query: FindManyQuery,
) -> Result<HttpResponse, AppError> {
    let page = registry.users.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// `GET /user/{id}`
pub async fn get_user(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = registry.users.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "user@test.com",
///   "password": "222222",
///   "name": "User"
/// }
/// ```
pub async fn create_user(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<UserCreateRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = registry.users.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// 보낸 필드만 변경됩니다. `password`가 있으면 다시 해시되어 저장됩니다.
pub async fn update_user(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
    payload: web::Json<UserUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = registry
        .users
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제이며, 사용자의 게시글과 댓글도 함께 삭제됩니다.
pub async fn delete_user(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = registry.users.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
