//! # Domain Entities Module
//!
//! 저장소에 영속되는 도메인 엔티티(User, Post, Comment)와
//! 저장소 구현체가 공통으로 사용하는 [`Entity`] 계약을 정의합니다.
//!
//! ## 저장 형식
//!
//! - `_id`: 컬렉션별로 1부터 순차 증가하는 정수 ID
//! - 필드명은 snake_case (`user_id`, `created_at`)
//! - 시각은 BSON DateTime (밀리초 정밀도)
//!
//! HTTP 응답에는 엔티티를 직접 쓰지 않고 `dto` 모듈의 응답 DTO로 변환합니다.
//!
//! ## 관계
//!
//! ```text
//! User 1 ── * Post 1 ── * Comment
//!   └──────────────────── * Comment
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod users;
pub mod posts;
pub mod comments;

pub use users::user::{NewUser, User, UserPatch};
pub use posts::post::{NewPost, Post, PostPatch};
pub use comments::comment::{Comment, CommentPatch, NewComment};

/// 다른 엔티티를 가리키는 외래 키 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefField {
    /// 작성자 (`user_id`)
    User,
    /// 소속 게시글 (`post_id`)
    Post,
}

impl RefField {
    /// 저장소 문서에서의 필드명
    pub fn column(self) -> &'static str {
        match self {
            RefField::User => "user_id",
            RefField::Post => "post_id",
        }
    }
}

/// 저장소가 다루는 엔티티의 공통 계약
///
/// 저장소 구현체(MongoDB, 메모리)는 이 trait만으로 ID 할당, 생성,
/// 부분 수정, 유니크 제약 검사를 수행합니다.
///
/// `Patch`는 `None` 필드를 직렬화하지 않아야 합니다. MongoDB 구현체는
/// 직렬화 결과를 그대로 `$set` 문서로 사용합니다.
pub trait Entity: Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static {
    /// 생성 시 필요한 값 (ID와 시각 제외)
    type New: Send + Sync + 'static;

    /// 부분 수정 값
    type Patch: Serialize + Send + Sync + 'static;

    /// 컬렉션 이름
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    /// 할당된 ID와 생성 시각으로 엔티티를 만듭니다.
    fn create(id: i64, new: Self::New, now: DateTime<Utc>) -> Self;

    /// 부분 수정을 적용하고 `updated_at`을 갱신합니다.
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// 외래 키 값. 해당 필드가 없으면 `None`
    fn reference(&self, _field: RefField) -> Option<i64> {
        None
    }

    /// 유니크 제약 대상 `(필드명, 값)` 목록
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// 밀리초 단위로 절삭한 현재 시각
///
/// BSON DateTime이 밀리초 정밀도이므로 두 저장소 구현체가 같은 값을 돌려주도록 맞춥니다.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
