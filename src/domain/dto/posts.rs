//! 게시글 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::comments::CommentResponse;
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::{Post, PostPatch};

/// 게시글 생성 요청. 작성자는 토큰의 사용자로 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub published: bool,
}

/// 게시글 부분 수정 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl From<PostUpdateRequest> for PostPatch {
    fn from(request: PostUpdateRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            published: request.published,
        }
    }
}

/// 게시글 응답 DTO
///
/// `joins`로 요청한 관계만 `user`, `comments` 필드에 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentResponse>>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            published: post.published,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: None,
            comments: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_content_is_optional() {
        let parsed: PostCreateRequest =
            serde_json::from_str(r#"{"title": "Hello world", "published": true}"#).unwrap();
        assert_eq!(parsed.content, None);
        assert!(parsed.published);
    }

    #[test]
    fn test_create_request_requires_published_bool() {
        let parsed: Result<PostCreateRequest, _> =
            serde_json::from_str(r#"{"title": "Hello", "published": "yes"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_omits_unrequested_relations() {
        let response = PostResponse {
            id: 1,
            title: "t".to_string(),
            content: None,
            published: false,
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            comments: None,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("user").is_none());
        assert!(json.get("comments").is_none());
        assert_eq!(json["userId"], 1);
        assert!(json["content"].is_null());
    }
}
