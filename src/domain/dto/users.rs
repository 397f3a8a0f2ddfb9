//! 사용자 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 생성 요청 (회원가입 본문과 동일)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

/// 사용자 부분 수정 요청
///
/// 본문에 `id`가 있어도 무시됩니다. `password`가 있으면 다시 해시됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[validate(email(message = "email must be an email"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "password should not be empty"))]
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Entity, NewUser};

    #[test]
    fn test_create_request_validation() {
        let ok = UserCreateRequest {
            email: "user@test.com".to_string(),
            password: "222222".to_string(),
            name: None,
        };
        assert!(ok.validate().is_ok());

        let bad_email = UserCreateRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = UserCreateRequest {
            password: String::new(),
            ..ok
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        assert!(UserUpdateRequest::default().validate().is_ok());

        let bad = UserUpdateRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_update_request_ignores_id() {
        let parsed: UserUpdateRequest =
            serde_json::from_str(r#"{"id": 99, "name": "  renamed "}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("renamed"));
        assert!(parsed.email.is_none());
    }

    #[test]
    fn test_response_never_contains_password() {
        let user = User::create(
            1,
            NewUser {
                email: "admin@test.com".to_string(),
                password_hash: "$2b$04$secret".to_string(),
                name: Some("admin".to_string()),
            },
            Utc::now(),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "admin@test.com");
        assert!(json.get("createdAt").is_some());
    }
}
