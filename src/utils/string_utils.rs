//! # 문자열 유틸리티
//!
//! 요청 DTO의 선택적 문자열 필드 정리에 사용합니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Alice  ".to_string())), Some("Alice".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde `deserialize_with`용 선택적 문자열 역직렬화 함수
///
/// 필드가 없을 때도 동작하도록 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct RegisterRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // {"name": "  Alice  "} → Some("Alice")
/// // {"name": ""}          → None
/// // {"name": null}        → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
