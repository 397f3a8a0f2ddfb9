//! 게시글 관리 서비스 구현
//!
//! 목록 조회는 `joins`로 작성자(`user`)와 댓글(`comments`)을 함께 불러올 수 있습니다.

use std::collections::HashMap;

use log::{debug, info};

use crate::domain::dto::comments::CommentResponse;
use crate::domain::dto::pagination::Paginated;
use crate::domain::dto::posts::{PostCreateRequest, PostResponse, PostUpdateRequest};
use crate::domain::dto::query::{unknown_relation, FindManyQuery};
use crate::domain::entities::{NewPost, Post, RefField};
use crate::errors::AppError;
use crate::repositories::{StoreResultExt, Stores};
use crate::services::relations::users_by_id;
use crate::utils::pagination::compute_pagination;

const POST_NOT_FOUND: &str = "Post not found";

/// 게시글 목록에서 함께 불러올 관계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostIncludes {
    pub user: bool,
    pub comments: bool,
}

impl PostIncludes {
    /// `joins` 쿼리를 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `user`, `comments` 이외의 이름
    pub fn from_query(query: &FindManyQuery) -> Result<Self, AppError> {
        let mut includes = Self::default();
        for (name, enabled) in query.include().unwrap_or_default() {
            match name.as_str() {
                "user" => includes.user = enabled,
                "comments" => includes.comments = enabled,
                _ => return Err(unknown_relation("Post", &name)),
            }
        }
        Ok(includes)
    }
}

/// 게시글 관리 비즈니스 로직 서비스
pub struct PostService {
    stores: Stores,
}

impl PostService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// 게시글 목록 (ID 오름차순, 페이지네이션, 관계 포함 선택)
    pub async fn find_all(&self, query: &FindManyQuery) -> Result<Paginated<PostResponse>, AppError> {
        let includes = PostIncludes::from_query(query)?;
        let window = query.window();

        let total = self.stores.posts.count().await?;
        let posts = self.stores.posts.find_many(&window).await?;
        debug!(
            "게시글 목록: page={} size={} total={} includes={:?}",
            window.page, window.page_size, total, includes
        );

        let data = self.embed(posts, includes).await?;
        Ok(Paginated::new(data, compute_pagination(total, window)))
    }

    async fn embed(&self, posts: Vec<Post>, includes: PostIncludes) -> Result<Vec<PostResponse>, AppError> {
        let users = if includes.user {
            users_by_id(self.stores.users.as_ref(), posts.iter().map(|p| p.user_id)).await?
        } else {
            HashMap::new()
        };

        let mut comments: HashMap<i64, Vec<CommentResponse>> = HashMap::new();
        if includes.comments {
            let post_ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
            for comment in self
                .stores
                .comments
                .find_by_refs(RefField::Post, &post_ids)
                .await?
            {
                comments
                    .entry(comment.post_id)
                    .or_default()
                    .push(CommentResponse::from(comment));
            }
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let id = post.id;
                let user_id = post.user_id;
                let mut response = PostResponse::from(post);
                if includes.user {
                    response.user = users.get(&user_id).cloned();
                }
                if includes.comments {
                    response.comments = Some(comments.remove(&id).unwrap_or_default());
                }
                response
            })
            .collect())
    }

    /// ID로 게시글 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "Post not found"
    pub async fn get_by_id(&self, id: i64) -> Result<PostResponse, AppError> {
        self.stores
            .posts
            .find_by_id(id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// 인증된 사용자를 작성자로 게시글을 생성합니다.
    pub async fn create(&self, user_id: i64, request: PostCreateRequest) -> Result<PostResponse, AppError> {
        let post = self
            .stores
            .posts
            .insert(NewPost {
                title: request.title,
                content: request.content,
                published: request.published,
                user_id,
            })
            .await?;

        info!("게시글 생성: id={} user={}", post.id, user_id);
        Ok(PostResponse::from(post))
    }

    /// 게시글 부분 수정
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "Post not found"
    pub async fn update(&self, id: i64, request: PostUpdateRequest) -> Result<PostResponse, AppError> {
        let post = self
            .stores
            .posts
            .update(id, request.into())
            .await
            .or_not_found(POST_NOT_FOUND)?;

        Ok(PostResponse::from(post))
    }

    /// 게시글과 그 게시글의 댓글을 삭제하고 삭제된 게시글을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - "Post not found"
    pub async fn delete(&self, id: i64) -> Result<PostResponse, AppError> {
        let post = self
            .stores
            .posts
            .delete(id)
            .await
            .or_not_found(POST_NOT_FOUND)?;

        let removed = self
            .stores
            .comments
            .delete_by_refs(RefField::Post, &[id])
            .await?;

        info!("게시글 삭제: id={} comments={}", id, removed);
        Ok(PostResponse::from(post))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewComment, NewUser};

    async fn seeded() -> (PostService, Stores) {
        let stores = Stores::in_memory();
        for email in ["admin@test.com", "user@test.com"] {
            stores
                .users
                .insert(NewUser {
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                    name: None,
                })
                .await
                .unwrap();
        }

        let posts = PostService::new(stores.clone());
        posts
            .create(
                1,
                PostCreateRequest {
                    title: "Post By User 1".to_string(),
                    content: None,
                    published: false,
                },
            )
            .await
            .unwrap();
        posts
            .create(
                2,
                PostCreateRequest {
                    title: "Post By User 2".to_string(),
                    content: Some("body".to_string()),
                    published: true,
                },
            )
            .await
            .unwrap();

        for post_id in [1, 1, 2] {
            stores
                .comments
                .insert(NewComment {
                    text: "comment".to_string(),
                    post_id,
                    user_id: 2,
                })
                .await
                .unwrap();
        }

        (posts, stores)
    }

    #[actix_web::test]
    async fn test_find_all_without_includes() {
        let (posts, _) = seeded().await;
        let page = posts.find_all(&FindManyQuery::default()).await.unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total_item, 2);
        assert_eq!(page.pagination.total_page, 1);
        assert!(page.data.iter().all(|p| p.user.is_none() && p.comments.is_none()));
    }

    #[actix_web::test]
    async fn test_find_all_with_user_and_comments() {
        let (posts, _) = seeded().await;
        let query = FindManyQuery::from_query_str("joins=user&joins=comments").unwrap();
        let page = posts.find_all(&query).await.unwrap();

        let first = &page.data[0];
        assert_eq!(first.user.as_ref().map(|u| u.email.as_str()), Some("admin@test.com"));
        assert_eq!(first.comments.as_ref().map(Vec::len), Some(2));

        let second = &page.data[1];
        assert_eq!(second.user.as_ref().map(|u| u.id), Some(2));
        assert_eq!(second.comments.as_ref().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_unknown_include() {
        let (posts, _) = seeded().await;
        let query = FindManyQuery::from_query_str("joins=author").unwrap();
        let err = posts.find_all(&query).await.unwrap_err();
        assert_eq!(err, unknown_relation("Post", "author"));
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing() {
        let (posts, _) = seeded().await;
        let err = posts
            .update(9, PostUpdateRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err, AppError::NotFound(POST_NOT_FOUND.to_string()));

        let err = posts.delete(9).await.unwrap_err();
        assert_eq!(err, AppError::NotFound(POST_NOT_FOUND.to_string()));
    }

    #[actix_web::test]
    async fn test_partial_update_keeps_other_fields() {
        let (posts, _) = seeded().await;
        let updated = posts
            .update(
                2,
                PostUpdateRequest {
                    published: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.published);
        assert_eq!(updated.title, "Post By User 2");
        assert_eq!(updated.content.as_deref(), Some("body"));
    }

    #[actix_web::test]
    async fn test_delete_removes_comments() {
        let (posts, stores) = seeded().await;
        let deleted = posts.delete(1).await.unwrap();
        assert_eq!(deleted.title, "Post By User 1");

        assert_eq!(stores.comments.count().await.unwrap(), 1);
        assert!(matches!(posts.get_by_id(1).await, Err(AppError::NotFound(_))));
    }
}
