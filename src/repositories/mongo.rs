//! # MongoDB 저장소 구현
//!
//! 엔티티마다 컬렉션 하나를 사용합니다.
//!
//! ## ID 할당
//!
//! 정수 ID는 `counters` 컬렉션의 `{ _id: <컬렉션명>, seq }` 문서를
//! `$inc` + upsert로 원자적으로 증가시켜 얻습니다.
//!
//! ## 인덱스
//!
//! - `users.email` (unique, `email_unique`)
//!
//! 유니크 위반(서버 코드 11000)은 `StoreError::Conflict`로 변환됩니다.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{self, doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::domain::entities::{now_millis, Entity, RefField, User};
use crate::errors::AppError;
use crate::repositories::{Store, StoreError, StoreResult, UserStore};
use crate::utils::pagination::PageWindow;

const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        let duplicate = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
                write_error.code == DUPLICATE_KEY_CODE
            }
            ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
            _ => false,
        };

        if duplicate {
            StoreError::Conflict(err.to_string())
        } else {
            StoreError::Other(err.to_string())
        }
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Other(err.to_string())
    }
}

/// 컬렉션 하나를 감싸는 MongoDB 저장소
pub struct MongoStore<E: Entity> {
    collection: Collection<E>,
    counters: Collection<Document>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoStore<E> {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection::<E>(E::COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
            _entity: PhantomData,
        }
    }

    /// 단일 필드 유니크 인덱스를 생성합니다. 이미 있으면 아무것도 하지 않습니다.
    pub async fn ensure_unique_index(&self, field: &str) -> Result<(), AppError> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(format!("{}_unique", field))
                    .build(),
            )
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("인덱스 확인: {}.{}", E::COLLECTION, field);
        Ok(())
    }

    /// 컬렉션 카운터를 1 증가시키고 새 값을 반환합니다.
    async fn next_id(&self) -> StoreResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": E::COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| StoreError::Other("counter upsert returned nothing".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| StoreError::Other(e.to_string()))
    }

    async fn find_with(&self, filter: Document) -> StoreResult<Vec<E>> {
        let cursor = self.collection.find(filter).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect::<Vec<E>>().await?)
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MongoStore<E> {
    async fn count(&self) -> StoreResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_many(&self, window: &PageWindow) -> StoreResult<Vec<E>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(window.skip())
            .limit(window.limit_i64())
            .await?;

        Ok(cursor.try_collect::<Vec<E>>().await?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<E>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<E>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_with(doc! { "_id": { "$in": ids.to_vec() } }).await
    }

    async fn find_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<Vec<E>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_with(doc! { field.column(): { "$in": ids.to_vec() } })
            .await
    }

    async fn insert(&self, new: E::New) -> StoreResult<E> {
        let id = self.next_id().await?;
        let entity = E::create(id, new, now_millis());

        self.collection.insert_one(&entity).await?;
        Ok(entity)
    }

    async fn update(&self, id: i64, patch: E::Patch) -> StoreResult<E> {
        let mut set = bson::to_document(&patch)?;
        set.insert("updated_at", bson::DateTime::from_chrono(now_millis()));

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .with_options(options)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> StoreResult<E> {
        self.collection
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = self
            .collection
            .delete_many(doc! { field.column(): { "$in": ids.to_vec() } })
            .await?;

        Ok(result.deleted_count)
    }

    async fn reset(&self) -> StoreResult<()> {
        self.collection.delete_many(doc! {}).await?;
        self.counters
            .delete_one(doc! { "_id": E::COLLECTION })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoStore<User> {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}
