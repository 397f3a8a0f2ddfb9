//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별 저장소를 [`Store`] trait으로 추상화하고, 두 가지 구현체를 제공합니다.
//!
//! - [`mongo::MongoStore`] - MongoDB 컬렉션 기반 (운영)
//! - [`memory::MemoryStore`] - 프로세스 메모리 기반 (로컬 개발, 테스트)
//!
//! 서비스 계층은 [`Stores`] 묶음만 주입받으며 어떤 구현체인지 알지 못합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Stores;
//!
//! let stores = Stores::in_memory();
//! let user = stores.users.find_by_email("user@test.com").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use thiserror::Error;

use crate::db::Database;
use crate::domain::entities::{Comment, Entity, Post, RefField, User};
use crate::errors::AppError;
use crate::utils::pagination::PageWindow;

pub mod memory;
pub mod mongo;

use memory::MemoryStore;
use mongo::MongoStore;

/// 저장소 계층 에러
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// 대상 레코드가 없음
    #[error("record not found")]
    NotFound,

    /// 유니크 제약 위반
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// 그 외 저장소 오류
    #[error("store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Record not found".to_string()),
            StoreError::Conflict(msg) => AppError::BadRequest(msg),
            StoreError::Other(msg) => AppError::DatabaseError(msg),
        }
    }
}

/// 서비스에서 저장소 결과를 도메인 메시지가 담긴 [`AppError`]로 바꾸는 헬퍼
pub trait StoreResultExt<T> {
    /// `StoreError::NotFound`를 주어진 메시지의 `AppError::NotFound`로 변환합니다.
    fn or_not_found(self, message: &str) -> Result<T, AppError>;

    /// `StoreError::Conflict`를 주어진 메시지의 `AppError::BadRequest`로 변환합니다.
    fn or_conflict(self, message: &str) -> Result<T, AppError>;
}

impl<T> StoreResultExt<T> for StoreResult<T> {
    fn or_not_found(self, message: &str) -> Result<T, AppError> {
        self.map_err(|err| match err {
            StoreError::NotFound => AppError::NotFound(message.to_string()),
            other => other.into(),
        })
    }

    fn or_conflict(self, message: &str) -> Result<T, AppError> {
        self.map_err(|err| match err {
            StoreError::Conflict(_) => AppError::BadRequest(message.to_string()),
            other => other.into(),
        })
    }
}

/// 엔티티 하나에 대한 저장소 계약
///
/// 목록 조회는 항상 ID 오름차순입니다. `update`와 `delete`는 대상이 없으면
/// `StoreError::NotFound`를 반환합니다.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// 전체 레코드 수
    async fn count(&self) -> StoreResult<u64>;

    /// 페이지 창에 해당하는 레코드 목록
    async fn find_many(&self, window: &PageWindow) -> StoreResult<Vec<E>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<E>>;

    /// 주어진 ID 집합에 해당하는 레코드 (없는 ID는 무시)
    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<E>>;

    /// 외래 키가 주어진 값 중 하나인 레코드
    async fn find_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<Vec<E>>;

    /// 새 ID를 할당해 저장하고 저장된 레코드를 반환합니다.
    async fn insert(&self, new: E::New) -> StoreResult<E>;

    /// 부분 수정 후 갱신된 레코드를 반환합니다.
    async fn update(&self, id: i64, patch: E::Patch) -> StoreResult<E>;

    /// 삭제된 레코드를 반환합니다.
    async fn delete(&self, id: i64) -> StoreResult<E>;

    /// 외래 키가 주어진 값 중 하나인 레코드를 모두 삭제하고 삭제 건수를 반환합니다.
    async fn delete_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<u64>;

    /// 모든 레코드를 지우고 ID 시퀀스를 1부터 다시 시작합니다.
    async fn reset(&self) -> StoreResult<()>;
}

/// 사용자 저장소 (이메일 조회 추가)
#[async_trait]
pub trait UserStore: Store<User> {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

/// 서비스 계층에 주입되는 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn Store<Post>>,
    pub comments: Arc<dyn Store<Comment>>,
}

impl Stores {
    /// MongoDB 저장소 묶음을 만들고 `users.email` 유니크 인덱스를 보장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 실패
    pub async fn mongo(database: Arc<Database>) -> Result<Self, AppError> {
        let db = database.get_database();
        let users = MongoStore::<User>::new(&db);
        users.ensure_unique_index("email").await?;

        Ok(Self {
            users: Arc::new(users),
            posts: Arc::new(MongoStore::<Post>::new(&db)),
            comments: Arc::new(MongoStore::<Comment>::new(&db)),
        })
    }

    /// 비어 있는 메모리 저장소 묶음
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryStore::<User>::new()),
            posts: Arc::new(MemoryStore::<Post>::new()),
            comments: Arc::new(MemoryStore::<Comment>::new()),
        }
    }

    /// 세 테이블을 모두 비우고 ID 시퀀스를 초기화합니다.
    ///
    /// 참조하는 쪽(댓글 → 게시글 → 사용자) 순서로 지우므로 중간 상태에도
    /// 끊어진 참조가 남지 않습니다.
    pub async fn reset(&self) -> StoreResult<()> {
        self.comments.reset().await?;
        self.posts.reset().await?;
        self.users.reset().await?;
        debug!("저장소 초기화 완료");
        Ok(())
    }
}
