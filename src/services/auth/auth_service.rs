//! 회원가입, 자격 증명 검증, 토큰 발급을 담당하는 인증 서비스

use std::sync::Arc;

use log::{info, warn};

use crate::domain::dto::auth::{RegisterRequest, TokenResponse};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::NewUser;
use crate::errors::AppError;
use crate::repositories::{StoreResultExt, UserStore};
use crate::services::auth::{PasswordService, TokenService};

const INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// 인증 서비스
///
/// 자격 증명 검증 실패는 원인(이메일 없음, 비밀번호 불일치)과 관계없이
/// 같은 `AuthenticationError`로 응답해 계정 존재 여부를 노출하지 않습니다.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// 새 사용자를 등록하고 바로 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 이미 등록된 이메일 ("Email already exists")
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        let password_hash = self.passwords.hash(&request.password)?;

        let user = self
            .users
            .insert(NewUser {
                email: request.email,
                password_hash,
                name: request.name,
            })
            .await
            .or_conflict("Email already exists")?;

        info!("사용자 등록: id={}", user.id);
        self.build_token(&UserResponse::from(user))
    }

    /// 이메일과 비밀번호를 확인하고 비밀번호가 제거된 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일이 없거나 비밀번호 불일치
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn validate(&self, email: &str, password: &str) -> Result<UserResponse, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("로그인 실패: 등록되지 않은 이메일");
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            warn!("로그인 실패: 비밀번호 불일치 (id={})", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(UserResponse::from(user))
    }

    /// 검증된 사용자에게 액세스 토큰을 발급합니다.
    pub fn build_token(&self, user: &UserResponse) -> Result<TokenResponse, AppError> {
        let access_token = self.tokens.issue(user.id, &user.email)?;
        Ok(TokenResponse { access_token })
    }

    /// 토큰의 주체에 해당하는 현재 사용자
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰 발급 이후 삭제된 사용자 ("User not found")
    pub async fn me(&self, user_id: i64) -> Result<UserResponse, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
