//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! 리프레시 토큰이나 폐기 목록은 없으며, 서명과 만료 시각만으로 신뢰합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::config::JwtConfig;
use crate::domain::models::token::token::TokenClaims;
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// 서명 키와 유효 기간을 생성 시점에 고정합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// 주어진 비밀키와 유효 기간(초)으로 생성합니다.
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_SECONDS` 설정으로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_seconds())
    }

    /// 토큰 유효 기간(초)
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// 사용자 ID와 이메일을 담은 액세스 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰의 주체 (`sub`)
    /// * `email` - 발급 당시의 사용자 이메일
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패 또는 유효 기간 범위 초과
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue(user.id, &user.email)?;
    /// ```
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::InternalError(format!("토큰 유효 기간이 범위를 벗어남: {}초", self.ttl_seconds))
            })?;

        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// HS256 이외의 알고리즘, 잘못된 서명, 만료된 토큰은 모두 거부합니다.
    /// 만료 시각에 여유(leeway)를 두지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명/알고리즘
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                debug!("토큰 검증 실패: {:?}", e.kind());
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        AppError::AuthenticationError("Token expired".to_string())
                    }
                    _ => AppError::AuthenticationError("Unauthorized".to_string()),
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    /// 스킴 이름은 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let claims = token_service.verify(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.trim().split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
                Ok(token.trim())
            }
            _ => Err(AppError::AuthenticationError("Unauthorized".to_string())),
        }
    }
}
