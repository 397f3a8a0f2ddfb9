//! 목록 응답에 관계 레코드를 채우기 위한 일괄 조회 헬퍼
//!
//! 행마다 조회하지 않고 필요한 ID를 모아 한 번에 불러옵니다.

use std::collections::{BTreeSet, HashMap};

use crate::domain::dto::posts::PostResponse;
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::Post;
use crate::errors::AppError;
use crate::repositories::{Store, UserStore};

/// 중복을 제거한 ID 목록 (오름차순)
pub(crate) fn distinct_ids(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// ID → 사용자 응답 맵
pub(crate) async fn users_by_id(
    users: &dyn UserStore,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, UserResponse>, AppError> {
    let found = users.find_by_ids(&distinct_ids(ids)).await?;
    Ok(found
        .into_iter()
        .map(|user| (user.id, UserResponse::from(user)))
        .collect())
}

/// ID → 게시글 응답 맵 (게시글의 관계는 채우지 않음)
pub(crate) async fn posts_by_id(
    posts: &dyn Store<Post>,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, PostResponse>, AppError> {
    let found = posts.find_by_ids(&distinct_ids(ids)).await?;
    Ok(found
        .into_iter()
        .map(|post| (post.id, PostResponse::from(post)))
        .collect())
}
