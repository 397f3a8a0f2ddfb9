//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 목록/조회/생성/수정/삭제를 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  find_all · get_by_id · create · update ·    │
//! │  delete (게시글/댓글 연쇄 삭제)               │
//! └──────────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//!   PasswordService        Stores (users, posts, comments)
//! ```
//!
//! 응답에는 비밀번호 해시가 포함되지 않습니다 ([`UserResponse`]).

use std::sync::Arc;

use log::{debug, info};

use crate::domain::dto::pagination::Paginated;
use crate::domain::dto::query::{unknown_relation, FindManyQuery};
use crate::domain::dto::users::{UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::domain::entities::{NewUser, RefField, UserPatch};
use crate::errors::AppError;
use crate::repositories::{StoreError, Stores};
use crate::services::auth::PasswordService;
use crate::utils::pagination::compute_pagination;

const USER_NOT_FOUND: &str = "User not found";
const EMAIL_TAKEN: &str = "Email already exists";

/// 사용자 저장소 에러를 도메인 메시지로 변환합니다.
fn user_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound => AppError::NotFound(USER_NOT_FOUND.to_string()),
        StoreError::Conflict(_) => AppError::BadRequest(EMAIL_TAKEN.to_string()),
        other => other.into(),
    }
}

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    stores: Stores,
    passwords: Arc<PasswordService>,
}

impl UserService {
    pub fn new(stores: Stores, passwords: Arc<PasswordService>) -> Self {
        Self { stores, passwords }
    }

    /// 사용자 목록 (ID 오름차순, 페이지네이션)
    ///
    /// 사용자에는 포함 가능한 관계가 없으므로 `joins`에 이름이 있으면 거부합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 알 수 없는 관계 이름
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn find_all(&self, query: &FindManyQuery) -> Result<Paginated<UserResponse>, AppError> {
        if let Some(include) = query.include() {
            if let Some(name) = include.keys().next() {
                return Err(unknown_relation("User", name));
            }
        }

        let window = query.window();
        let total = self.stores.users.count().await?;
        let users = self.stores.users.find_many(&window).await?;

        debug!("사용자 목록: page={} size={} total={}", window.page, window.page_size, total);

        Ok(Paginated::new(
            users.into_iter().map(UserResponse::from).collect(),
            compute_pagination(total, window),
        ))
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "User not found"
    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        self.stores
            .users
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 사용자 생성. 비밀번호는 해시되어 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - "Email already exists"
    pub async fn create(&self, request: UserCreateRequest) -> Result<UserResponse, AppError> {
        let password_hash = self.passwords.hash(&request.password)?;

        let user = self
            .stores
            .users
            .insert(NewUser {
                email: request.email,
                password_hash,
                name: request.name,
            })
            .await
            .map_err(user_error)?;

        info!("사용자 생성: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 사용자 부분 수정. 새 비밀번호가 있으면 다시 해시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "User not found"
    /// * `AppError::BadRequest` - 다른 사용자의 이메일로 변경 시도
    pub async fn update(&self, id: i64, request: UserUpdateRequest) -> Result<UserResponse, AppError> {
        let password_hash = match request.password.as_deref() {
            Some(plaintext) => Some(self.passwords.hash(plaintext)?),
            None => None,
        };

        let patch = UserPatch {
            email: request.email,
            password_hash,
            name: request.name,
        };

        let user = self.stores.users.update(id, patch).await.map_err(user_error)?;
        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 사용자가 작성한 댓글, 게시글, 그 게시글에 달린 댓글도 함께 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "User not found"
    pub async fn delete(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.stores.users.delete(id).await.map_err(user_error)?;

        let post_ids: Vec<i64> = self
            .stores
            .posts
            .find_by_refs(RefField::User, &[id])
            .await?
            .iter()
            .map(|post| post.id)
            .collect();

        let mut removed = self
            .stores
            .comments
            .delete_by_refs(RefField::User, &[id])
            .await?;
        removed += self
            .stores
            .comments
            .delete_by_refs(RefField::Post, &post_ids)
            .await?;
        self.stores.posts.delete_by_refs(RefField::User, &[id]).await?;

        info!(
            "사용자 삭제: id={} posts={} comments={}",
            id,
            post_ids.len(),
            removed
        );
        Ok(UserResponse::from(user))
    }
}
