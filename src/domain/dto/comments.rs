//! 댓글 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::posts::PostResponse;
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::{Comment, CommentPatch};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub text: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub post_id: Option<i64>,
}

impl From<CommentUpdateRequest> for CommentPatch {
    fn from(request: CommentUpdateRequest) -> Self {
        Self {
            text: request.text,
            post_id: request.post_id,
        }
    }
}

/// 댓글 응답 DTO (`user`, `post` 관계 선택 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Box<PostResponse>>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            post_id: comment.post_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            user: None,
            post: None,
        }
    }
}
