//! # 쿼리 문자열 유틸리티
//!
//! 목록 조회 쿼리(`page`, `pageSize`, `joins`)를 해석하는 데 필요한
//! 순수 함수들입니다.
//!
//! 같은 키가 여러 번 나오거나(`joins=a&joins=b`) 대괄호 표기(`joins[]=a`)를
//! 쓰면 목록 값으로, `page[a]=1`처럼 키가 붙으면 맵 값으로 취급합니다.

use std::collections::{BTreeMap, HashMap};

/// 쿼리 문자열에서 하나의 키가 가진 값의 형태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

/// 관계 이름 → 포함 여부
pub type IncludeMap = BTreeMap<String, bool>;

/// 디코딩된 `(key, value)` 쌍을 키별 [`QueryValue`]로 묶습니다.
pub fn group_query_pairs(pairs: Vec<(String, String)>) -> HashMap<String, QueryValue> {
    let mut grouped: HashMap<String, QueryValue> = HashMap::new();

    for (raw_key, value) in pairs {
        let (key, suffix) = split_bracket(&raw_key);

        match suffix {
            Some(sub) if !sub.is_empty() => {
                let entry = grouped
                    .entry(key.to_string())
                    .or_insert_with(|| QueryValue::Map(BTreeMap::new()));
                match entry {
                    QueryValue::Map(map) => {
                        map.insert(sub.to_string(), value);
                    }
                    other => {
                        let mut map = BTreeMap::new();
                        map.insert(sub.to_string(), value);
                        *other = QueryValue::Map(map);
                    }
                }
            }
            Some(_) => push_list(&mut grouped, key, value),
            None => match grouped.get_mut(key) {
                Some(existing) => push_value(existing, value),
                None => {
                    grouped.insert(key.to_string(), QueryValue::Scalar(value));
                }
            },
        }
    }

    grouped
}

fn split_bracket(raw_key: &str) -> (&str, Option<&str>) {
    match (raw_key.find('['), raw_key.ends_with(']')) {
        (Some(open), true) if open > 0 => (&raw_key[..open], Some(&raw_key[open + 1..raw_key.len() - 1])),
        _ => (raw_key, None),
    }
}

fn push_list(grouped: &mut HashMap<String, QueryValue>, key: &str, value: String) {
    match grouped.get_mut(key) {
        Some(existing) => push_value(existing, value),
        None => {
            grouped.insert(key.to_string(), QueryValue::List(vec![value]));
        }
    }
}

fn push_value(existing: &mut QueryValue, value: String) {
    match existing {
        QueryValue::Scalar(first) => {
            let first = std::mem::take(first);
            *existing = QueryValue::List(vec![first, value]);
        }
        QueryValue::List(items) => items.push(value),
        // 맵 값에 평범한 값이 섞이면 맵을 유지합니다.
        QueryValue::Map(_) => {}
    }
}

/// 쿼리 값을 선택적 정수로 변환합니다.
///
/// 문자열 앞부분의 10진 정수만 읽습니다(`"13dff0"` → 13, `"1.49"` → 1).
/// 숫자로 시작하지 않는 문자열, 목록, 맵은 `None`입니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(coerce_optional_int(Some(&QueryValue::Scalar("01".into()))), Some(1));
/// assert_eq!(coerce_optional_int(Some(&QueryValue::Scalar("xx32".into()))), None);
/// assert_eq!(coerce_optional_int(None), None);
/// ```
pub fn coerce_optional_int(value: Option<&QueryValue>) -> Option<i64> {
    match value {
        Some(QueryValue::Scalar(raw)) => parse_leading_int(raw),
        _ => None,
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// 관계 이름 목록을 포함 맵으로 바꿉니다.
///
/// 목록이 없으면 `None`, 있으면 각 이름을 `true`로 매핑합니다.
/// 중복 이름은 하나로 합쳐집니다.
pub fn build_include(joins: Option<&[String]>) -> Option<IncludeMap> {
    joins.map(|names| names.iter().map(|name| (name.clone(), true)).collect())
}
