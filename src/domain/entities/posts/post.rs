//! Post Entity Implementation

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, RefField};

/// 게시글 엔티티
///
/// `user_id`는 작성자이며 생성 시 인증된 사용자로 고정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub published: bool,
    pub user_id: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub user_id: i64,
}

/// 게시글 부분 수정 값. 작성자는 바꿀 수 없습니다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Entity for Post {
    type New = NewPost;
    type Patch = PostPatch;

    const COLLECTION: &'static str = "posts";

    fn id(&self) -> i64 {
        self.id
    }

    fn create(id: i64, new: NewPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            published: new.published,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        self.updated_at = now;
    }

    fn reference(&self, field: RefField) -> Option<i64> {
        match field {
            RefField::User => Some(self.user_id),
            RefField::Post => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_reference() {
        let post = Post::create(
            7,
            NewPost {
                title: "Post By User 1".to_string(),
                content: None,
                published: false,
                user_id: 1,
            },
            Utc::now(),
        );

        assert_eq!(post.id(), 7);
        assert_eq!(post.reference(RefField::User), Some(1));
        assert_eq!(post.reference(RefField::Post), None);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_patch_document_only_contains_present_fields() {
        let patch = PostPatch {
            published: Some(true),
            ..Default::default()
        };
        let doc = bson::to_document(&patch).unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_bool("published").unwrap(), true);
    }
}
