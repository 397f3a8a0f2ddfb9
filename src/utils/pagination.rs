//! # 페이지네이션 유틸리티
//!
//! 목록 조회에서 사용하는 페이지 창(offset/limit) 계산과
//! 응답 메타데이터 계산을 담당합니다. 모든 함수는 순수 함수입니다.

use crate::domain::dto::pagination::PaginationMeta;

/// `page`가 없거나 1 미만일 때 사용하는 기본값
pub const DEFAULT_PAGE: u64 = 1;

/// `pageSize`가 없거나 1 미만일 때 사용하는 기본값
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// 한 번의 목록 조회에서 가져올 구간
///
/// `page`와 `page_size`는 항상 1 이상입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    /// 쿼리에서 변환된 값으로 페이지 창을 만듭니다.
    ///
    /// 값이 없거나 1 미만이면 기본값(page=1, pageSize=10)을 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let window = PageWindow::resolve(Some(3), None);
    /// assert_eq!(window.offset(), 20);
    /// assert_eq!(window.limit(), 10);
    /// ```
    pub fn resolve(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    /// 건너뛸 레코드 수: `(page - 1) * page_size`
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// MongoDB 드라이버용 `skip` 값
    ///
    /// 드라이버는 `skip`을 i64로 직렬화하므로 `i64::MAX`에서 자릅니다.
    /// 그만큼 건너뛰면 결과는 항상 빈 페이지입니다.
    pub fn skip(&self) -> u64 {
        self.offset().min(i64::MAX as u64)
    }

    /// 가져올 최대 레코드 수
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// MongoDB 드라이버용 `limit` 값
    pub fn limit_i64(&self) -> i64 {
        i64::try_from(self.page_size).unwrap_or(i64::MAX)
    }
}

fn positive_or(value: Option<i64>, default: u64) -> u64 {
    match value {
        Some(v) if v >= 1 => v as u64,
        _ => default,
    }
}

/// 전체 레코드 수와 페이지 창으로 응답 메타데이터를 계산합니다.
///
/// `totalPage = ceil(totalItem / pageSize)` 이며, 레코드가 없으면 0입니다.
pub fn compute_pagination(total_item: u64, window: PageWindow) -> PaginationMeta {
    PaginationMeta {
        page: window.page,
        page_size: window.page_size,
        total_item,
        total_page: total_item.div_ceil(window.page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_missing() {
        let window = PageWindow::resolve(None, None);
        assert_eq!(window, PageWindow { page: 1, page_size: 10 });
    }

    #[test]
    fn test_resolve_rejects_non_positive_values() {
        assert_eq!(PageWindow::resolve(Some(0), Some(0)), PageWindow::default());
        assert_eq!(PageWindow::resolve(Some(-10), Some(-1)), PageWindow::default());
    }

    #[test]
    fn test_offset_and_limit() {
        let window = PageWindow::resolve(Some(2), Some(10));
        assert_eq!(window.offset(), 10);
        assert_eq!(window.limit(), 10);

        let first = PageWindow::resolve(Some(1), Some(25));
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_offset_saturates_on_huge_pages() {
        let window = PageWindow::resolve(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(window.offset(), u64::MAX);
        assert_eq!(window.limit_i64(), i64::MAX);
    }

    #[test]
    fn test_skip_fits_in_i64() {
        let huge = PageWindow::resolve(Some(i64::MAX), None);
        assert_eq!(huge.skip(), i64::MAX as u64);
        assert!(i64::try_from(huge.skip()).is_ok());

        let wide = PageWindow::resolve(Some(1_000_000_000_000), Some(10_000_000));
        assert_eq!(wide.skip(), i64::MAX as u64);

        let normal = PageWindow::resolve(Some(3), Some(10));
        assert_eq!(normal.skip(), 20);
    }

    #[test]
    fn test_compute_pagination() {
        let meta = compute_pagination(25, PageWindow::resolve(Some(2), Some(10)));
        assert_eq!(meta.page, 2);
        assert_eq!(meta.page_size, 10);
        assert_eq!(meta.total_item, 25);
        assert_eq!(meta.total_page, 3);
    }

    #[test]
    fn test_compute_pagination_exact_and_empty() {
        assert_eq!(compute_pagination(20, PageWindow::default()).total_page, 2);
        assert_eq!(compute_pagination(0, PageWindow::default()).total_page, 0);
        assert_eq!(compute_pagination(1, PageWindow::default()).total_page, 1);
    }
}
