//! Comment HTTP Handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::registry::ServiceRegistry;
use crate::domain::dto::comments::{CommentCreateRequest, CommentUpdateRequest};
use crate::domain::dto::query::FindManyQuery;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::AppError;

/// `GET /comment` (`joins`: `user`, `post`)
pub async fn find_comments(
    registry: web::Data<ServiceRegistry>,
    query: FindManyQuery,
) -> Result<HttpResponse, AppError> {
    let page = registry.comments.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// `GET /comment/{id}`
pub async fn get_comment(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let comment = registry.comments.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// `POST /comment`
///
/// ```json
/// { "text": "bruhhhh", "postId": 2 }
/// ```
pub async fn create_comment(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: web::Json<CommentCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment = registry
        .comments
        .create(user.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

/// `PUT /comment/{id}`
pub async fn update_comment(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
    payload: web::Json<CommentUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let comment = registry
        .comments
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// `DELETE /comment/{id}`
pub async fn delete_comment(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let comment = registry.comments.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comment))
}
