//! Post HTTP Handlers
//!
//! 게시글 CRUD 엔드포인트입니다. 작성자는 토큰의 사용자로 채워집니다.
//!
//! 목록 조회는 `joins`로 관계를 포함할 수 있습니다.
//!
//! ```bash
//! curl "http://localhost:8080/post?page=1&pageSize=5&joins=user&joins=comments" \
//!   -H "Authorization: Bearer $TOKEN"
//! ```

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::registry::ServiceRegistry;
use crate::domain::dto::posts::{PostCreateRequest, PostUpdateRequest};
use crate::domain::dto::query::FindManyQuery;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::AppError;

/// `GET /post`
pub async fn find_posts(
    registry: web::Data<ServiceRegistry>,
    query: FindManyQuery,
) -> Result<HttpResponse, AppError> {
    let page = registry.posts.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// `GET /post/{id}`
pub async fn get_post(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post = registry.posts.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// `POST /post`
pub async fn create_post(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: web::Json<PostCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = registry
        .posts
        .create(user.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

/// `PUT /post/{id}`
pub async fn update_post(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
    payload: web::Json<PostUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let post = registry
        .posts
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// `DELETE /post/{id}`
pub async fn delete_post(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post = registry.posts.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}
