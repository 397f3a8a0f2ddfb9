//! 프로세스 메모리 저장소
//!
//! `STORE_BACKEND=memory`로 MongoDB 없이 서버를 띄우거나 테스트에서 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{now_millis, Entity, RefField, User};
use crate::repositories::{Store, StoreError, StoreResult, UserStore};
use crate::utils::pagination::PageWindow;

struct Table<E> {
    rows: BTreeMap<i64, E>,
    last_id: i64,
}

impl<E: Entity> Table<E> {
    /// `candidate`의 유니크 키가 다른 행과 겹치는지 검사합니다.
    fn check_unique(&self, candidate: &E) -> StoreResult<()> {
        for (field, value) in candidate.unique_keys() {
            let taken = self
                .rows
                .values()
                .filter(|row| row.id() != candidate.id())
                .any(|row| row.unique_keys().iter().any(|(f, v)| *f == field && *v == value));

            if taken {
                return Err(StoreError::Conflict(format!("duplicate {}: {}", field, value)));
            }
        }
        Ok(())
    }
}

/// `BTreeMap` 기반 저장소. ID 순서가 곧 목록 순서입니다.
pub struct MemoryStore<E> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Table<E>>> {
        self.table
            .read()
            .map_err(|_| StoreError::Other(format!("{} lock poisoned", E::COLLECTION)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Table<E>>> {
        self.table
            .write()
            .map_err(|_| StoreError::Other(format!("{} lock poisoned", E::COLLECTION)))
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn count(&self) -> StoreResult<u64> {
        Ok(self.read()?.rows.len() as u64)
    }

    async fn find_many(&self, window: &PageWindow) -> StoreResult<Vec<E>> {
        let table = self.read()?;
        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);

        Ok(table.rows.values().skip(offset).take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<E>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<E>> {
        let table = self.read()?;
        Ok(table
            .rows
            .values()
            .filter(|row| ids.contains(&row.id()))
            .cloned()
            .collect())
    }

    async fn find_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<Vec<E>> {
        let table = self.read()?;
        Ok(table
            .rows
            .values()
            .filter(|row| row.reference(field).is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn insert(&self, new: E::New) -> StoreResult<E> {
        let mut table = self.write()?;
        let entity = E::create(table.last_id + 1, new, now_millis());
        table.check_unique(&entity)?;

        table.last_id = entity.id();
        table.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, patch: E::Patch) -> StoreResult<E> {
        let mut table = self.write()?;
        let mut entity = table.rows.get(&id).cloned().ok_or(StoreError::NotFound)?;
        entity.apply(patch, now_millis());
        table.check_unique(&entity)?;

        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> StoreResult<E> {
        self.write()?.rows.remove(&id).ok_or(StoreError::NotFound)
    }

    async fn delete_by_refs(&self, field: RefField, ids: &[i64]) -> StoreResult<u64> {
        let mut table = self.write()?;
        let before = table.rows.len();
        table
            .rows
            .retain(|_, row| !row.reference(field).is_some_and(|id| ids.contains(&id)));

        Ok((before - table.rows.len()) as u64)
    }

    async fn reset(&self) -> StoreResult<()> {
        let mut table = self.write()?;
        table.rows.clear();
        table.last_id = 0;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let table = self.read()?;
        Ok(table.rows.values().find(|user| user.email == email).cloned())
    }
}
