//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 하나의 JSON 응답 형식으로 변환합니다.
//!
//! ```json
//! { "error": "not_found", "message": "Post not found" }
//! ```
//!
//! `message` 필드에는 도메인 메시지가 그대로 들어갑니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_post(id: i64) -> Result<PostResponse, AppError> {
//!     let post = store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
//!     Ok(PostResponse::from(post))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// HTTP 경계에서 자동으로 상태 코드와 JSON 본문으로 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 비즈니스 규칙 위반 (400 Bad Request), 예: 이메일 중복
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::AuthenticationError(_) => "unauthorized",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 접두사 없는 도메인 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.error_code(),
            "message": self.message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
