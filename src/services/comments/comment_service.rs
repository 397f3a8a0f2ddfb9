//! 댓글 관리 서비스 구현
//!
//! 댓글은 항상 존재하는 게시글에 달립니다. 생성/수정 시 `postId`가 가리키는
//! 게시글이 없으면 `404 Post not found`로 응답합니다.

use std::collections::HashMap;

use log::{debug, info};

use crate::domain::dto::comments::{CommentCreateRequest, CommentResponse, CommentUpdateRequest};
use crate::domain::dto::pagination::Paginated;
use crate::domain::dto::query::{unknown_relation, FindManyQuery};
use crate::domain::entities::{Comment, NewComment};
use crate::errors::AppError;
use crate::repositories::{StoreResultExt, Stores};
use crate::services::relations::{posts_by_id, users_by_id};
use crate::utils::pagination::compute_pagination;

const COMMENT_NOT_FOUND: &str = "Comment not found";
const POST_NOT_FOUND: &str = "Post not found";

/// 댓글 목록에서 함께 불러올 관계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentIncludes {
    pub user: bool,
    pub post: bool,
}

impl CommentIncludes {
    /// `joins` 쿼리를 해석합니다. `user`, `post`만 허용됩니다.
    pub fn from_query(query: &FindManyQuery) -> Result<Self, AppError> {
        let mut includes = Self::default();
        for (name, enabled) in query.include().unwrap_or_default() {
            match name.as_str() {
                "user" => includes.user = enabled,
                "post" => includes.post = enabled,
                _ => return Err(unknown_relation("Comment", &name)),
            }
        }
        Ok(includes)
    }
}

/// 댓글 관리 비즈니스 로직 서비스
pub struct CommentService {
    stores: Stores,
}

impl CommentService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn find_all(&self, query: &FindManyQuery) -> Result<Paginated<CommentResponse>, AppError> {
        let includes = CommentIncludes::from_query(query)?;
        let window = query.window();

        let total = self.stores.comments.count().await?;
        let comments = self.stores.comments.find_many(&window).await?;
        debug!(
            "댓글 목록: page={} size={} total={} includes={:?}",
            window.page, window.page_size, total, includes
        );

        let data = self.embed(comments, includes).await?;
        Ok(Paginated::new(data, compute_pagination(total, window)))
    }

    async fn embed(
        &self,
        comments: Vec<Comment>,
        includes: CommentIncludes,
    ) -> Result<Vec<CommentResponse>, AppError> {
        let users = if includes.user {
            users_by_id(self.stores.users.as_ref(), comments.iter().map(|c| c.user_id)).await?
        } else {
            HashMap::new()
        };
        let posts = if includes.post {
            posts_by_id(self.stores.posts.as_ref(), comments.iter().map(|c| c.post_id)).await?
        } else {
            HashMap::new()
        };

        Ok(comments
            .into_iter()
            .map(|comment| {
                let (user_id, post_id) = (comment.user_id, comment.post_id);
                let mut response = CommentResponse::from(comment);
                if includes.user {
                    response.user = users.get(&user_id).cloned();
                }
                if includes.post {
                    response.post = posts.get(&post_id).cloned().map(Box::new);
                }
                response
            })
            .collect())
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - "Comment not found"
    pub async fn get_by_id(&self, id: i64) -> Result<CommentResponse, AppError> {
        self.stores
            .comments
            .find_by_id(id)
            .await?
            .map(CommentResponse::from)
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
    }

    async fn ensure_post_exists(&self, post_id: i64) -> Result<(), AppError> {
        match self.stores.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(POST_NOT_FOUND.to_string())),
        }
    }

    /// 인증된 사용자를 작성자로 댓글을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - `postId`의 게시글이 없음 ("Post not found")
    pub async fn create(
        &self,
        user_id: i64,
        request: CommentCreateRequest,
    ) -> Result<CommentResponse, AppError> {
        self.ensure_post_exists(request.post_id).await?;

        let comment = self
            .stores
            .comments
            .insert(NewComment {
                text: request.text,
                post_id: request.post_id,
                user_id,
            })
            .await?;

        info!("댓글 생성: id={} post={} user={}", comment.id, comment.post_id, user_id);
        Ok(CommentResponse::from(comment))
    }

    /// 댓글 부분 수정. `postId`를 옮기면 대상 게시글이 존재해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "Comment not found" 또는 "Post not found"
    pub async fn update(
        &self,
        id: i64,
        request: CommentUpdateRequest,
    ) -> Result<CommentResponse, AppError> {
        self.stores
            .comments
            .find_by_id(id)
            .await
            .or_not_found(COMMENT_NOT_FOUND)?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        if let Some(post_id) = request.post_id {
            self.ensure_post_exists(post_id).await?;
        }

        let comment = self
            .stores
            .comments
            .update(id, request.into())
            .await
            .or_not_found(COMMENT_NOT_FOUND)?;

        Ok(CommentResponse::from(comment))
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - "Comment not found"
    pub async fn delete(&self, id: i64) -> Result<CommentResponse, AppError> {
        let comment = self
            .stores
            .comments
            .delete(id)
            .await
            .or_not_found(COMMENT_NOT_FOUND)?;

        info!("댓글 삭제: id={}", id);
        Ok(CommentResponse::from(comment))
    }
}
