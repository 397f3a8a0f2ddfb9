//! # HTTP Handlers Module
//!
//! 요청을 서비스 호출로 연결하는 얇은 계층입니다.
//!
//! - 서비스는 `web::Data<ServiceRegistry>`로 받습니다.
//! - 요청 본문 검증(`validator`) 실패는 `AppError::ValidationError`(400)가 됩니다.
//! - 인증 주체는 가드가 저장한 extension에서 `AuthenticatedUser`/`ValidatedUser`로 추출합니다.
//! - 라우트 등록은 `routes` 모듈의 라우트 테이블이 담당합니다.
//!
//! ```rust,ignore
//! pub async fn get_post(
//!     registry: web::Data<ServiceRegistry>,
//!     id: web::Path<i64>,
//! ) -> Result<HttpResponse, AppError> {
//!     let post = registry.posts.get_by_id(id.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(post))
//! }
//! ```

pub mod auth;
pub mod users;
pub mod posts;
pub mod comments;
