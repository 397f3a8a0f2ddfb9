//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::users::UserCreateRequest;

/// 회원가입 요청. 사용자 생성 요청과 같은 필드를 가집니다.
pub type RegisterRequest = UserCreateRequest;

/// 로그인 요청 (자격 증명 가드가 본문에서 추출)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email should not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// 토큰 발급 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_is_camel_case() {
        let json = serde_json::to_value(TokenResponse {
            access_token: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "accessToken": "abc" }));
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let missing: Result<LoginRequest, _> = serde_json::from_str(r#"{"email": "a@b.c"}"#);
        assert!(missing.is_err());

        let empty = LoginRequest {
            email: String::new(),
            password: "x".to_string(),
        };
        assert!(empty.validate().is_err());
    }
}
