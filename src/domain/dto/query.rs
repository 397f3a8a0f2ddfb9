//! 목록 조회 쿼리 DTO
//!
//! `GET /user`, `GET /post`, `GET /comment`가 공통으로 받는 쿼리입니다.
//!
//! | 키 | 형식 | 설명 |
//! |----|------|------|
//! | `page` | 정수 문자열 | 1부터 시작, 기본값 1 |
//! | `pageSize` | 정수 문자열 | 기본값 10 |
//! | `joins` | 문자열 목록 | 함께 불러올 관계 이름 |

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::errors::{AppError, AppResult};
use crate::utils::pagination::PageWindow;
use crate::utils::query_utils::{
    build_include, coerce_optional_int, group_query_pairs, IncludeMap, QueryValue,
};

/// 목록 조회 쿼리
///
/// `page`/`pageSize`는 정수로 해석할 수 없으면 `None`이 됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindManyQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub joins: Option<Vec<String>>,
}

impl FindManyQuery {
    /// 원본 쿼리 문자열을 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 디코딩 실패 또는 `joins`가 맵 형태인 경우
    pub fn from_query_str(raw: &str) -> AppResult<Self> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(raw)
            .map_err(|e| AppError::ValidationError(e.to_string()))?
            .into_inner();
        let grouped = group_query_pairs(pairs);

        let joins = match grouped.get("joins") {
            None => None,
            Some(QueryValue::Scalar(name)) => Some(non_empty(std::slice::from_ref(name))),
            Some(QueryValue::List(names)) => Some(non_empty(names)),
            Some(QueryValue::Map(_)) => {
                return Err(AppError::ValidationError(
                    "joins must be an array".to_string(),
                ));
            }
        };

        Ok(Self {
            page: coerce_optional_int(grouped.get("page")),
            page_size: coerce_optional_int(grouped.get("pageSize")),
            joins,
        })
    }

    /// 기본값이 적용된 페이지 창
    pub fn window(&self) -> PageWindow {
        PageWindow::resolve(self.page, self.page_size)
    }

    /// 요청된 관계 포함 맵
    pub fn include(&self) -> Option<IncludeMap> {
        build_include(self.joins.as_deref())
    }
}

fn non_empty(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// 알 수 없는 관계 이름에 대한 검증 에러
pub fn unknown_relation(resource: &str, relation: &str) -> AppError {
    AppError::ValidationError(format!("Unknown relation `{}` for {}", relation, resource))
}

impl FromRequest for FindManyQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_query_str(req.query_string()))
    }
}
