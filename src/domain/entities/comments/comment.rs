//! Comment Entity Implementation

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, RefField};

/// 댓글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: i64,
    pub text: String,
    pub post_id: i64,
    pub user_id: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
}

impl Entity for Comment {
    type New = NewComment;
    type Patch = CommentPatch;

    const COLLECTION: &'static str = "comments";

    fn id(&self) -> i64 {
        self.id
    }

    fn create(id: i64, new: NewComment, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text: new.text,
            post_id: new.post_id,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: CommentPatch, now: DateTime<Utc>) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(post_id) = patch.post_id {
            self.post_id = post_id;
        }
        self.updated_at = now;
    }

    fn reference(&self, field: RefField) -> Option<i64> {
        match field {
            RefField::User => Some(self.user_id),
            RefField::Post => Some(self.post_id),
        }
    }
}
