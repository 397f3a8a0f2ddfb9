//! User Entity Implementation
//!
//! 로그인 주체이자 게시글/댓글의 작성자입니다.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Entity;

/// 사용자 엔티티
///
/// `password_hash`는 bcrypt 해시이며 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 표시 이름 (선택)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// 사용자 생성 값. 비밀번호는 이미 해시된 상태여야 합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

/// 사용자 부분 수정 값
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for User {
    type New = NewUser;
    type Patch = UserPatch;

    const COLLECTION: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }

    fn create(id: i64, new: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        self.updated_at = now;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("email", self.email.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(now: DateTime<Utc>) -> User {
        User::create(
            1,
            NewUser {
                email: "admin@test.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
                name: Some("admin".to_string()),
            },
            now,
        )
    }

    #[test]
    fn test_apply_patch_keeps_missing_fields() {
        let created = crate::domain::entities::now_millis();
        let mut user = sample(created);
        let later = created + Duration::seconds(5);

        user.apply(
            UserPatch {
                email: Some("new@test.com".to_string()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "new@test.com");
        assert_eq!(user.name.as_deref(), Some("admin"));
        assert_eq!(user.created_at, created);
        assert_eq!(user.updated_at, later);
    }

    #[test]
    fn test_email_is_unique_key() {
        let user = sample(Utc::now());
        assert_eq!(user.unique_keys(), vec![("email", "admin@test.com".to_string())]);
    }

    #[test]
    fn test_bson_document_shape() {
        let user = sample(crate::domain::entities::now_millis());
        let doc = bson::to_document(&user).unwrap();

        assert_eq!(doc.get_i64("_id").unwrap(), 1);
        assert!(doc.get_datetime("created_at").is_ok());

        let restored: User = bson::from_document(doc).unwrap();
        assert_eq!(restored.created_at, user.created_at);
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_document() {
        let doc = bson::to_document(&UserPatch::default()).unwrap();
        assert!(doc.is_empty());
    }
}
