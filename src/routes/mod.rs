//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트를 메서드 + 경로 → 핸들러의 명시적 테이블로 등록합니다.
//! 가드는 스코프나 리소스에 `.wrap(...)`으로 붙습니다.
//!
//! | 메서드 | 경로 | 가드 |
//! |--------|------|------|
//! | `GET` | `/health` | 없음 |
//! | `POST` | `/auth/register` | 없음 |
//! | `POST` | `/auth/login` | CredentialGuard |
//! | `GET` | `/auth/me` | TokenGuard |
//! | `GET`, `POST` | `/user`, `/post`, `/comment` | TokenGuard |
//! | `GET`, `PUT`, `DELETE` | `/user/{id}`, `/post/{id}`, `/comment/{id}` | TokenGuard |
//!
//! JSON 본문과 경로 파라미터 추출 실패는 `AppError::ValidationError`(400)로 응답합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &registry));
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::registry::ServiceRegistry;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::{CredentialGuard, RequireGuard, TokenGuard};

#[cfg(test)]
mod tests;

/// 모든 라우트를 설정합니다
///
/// 레지스트리를 `web::Data`로 등록하고, 가드를 레지스트리의 서비스로 생성합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `registry` - 핸들러와 가드가 사용할 서비스 묶음
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.app_data(web::Data::new(registry.clone()))
        .app_data(json_config())
        .app_data(path_config())
        .route("/health", web::get().to(health_check));

    configure_auth_routes(cfg, registry);
    configure_user_routes(cfg, registry);
    configure_post_routes(cfg, registry);
    configure_comment_routes(cfg, registry);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn token_guard(registry: &ServiceRegistry) -> RequireGuard<TokenGuard> {
    RequireGuard::new(TokenGuard::new(registry.tokens.clone()))
}

/// 인증 관련 라우트
///
/// ```bash
/// # 로그인
/// curl -X POST http://localhost:8080/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"admin@test.com","password":"111111"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(handlers::auth::register))
            .service(
                web::resource("/login")
                    .wrap(RequireGuard::new(CredentialGuard::new(registry.auth.clone())))
                    .route(web::post().to(handlers::auth::login)),
            )
            .service(
                web::resource("/me")
                    .wrap(token_guard(registry))
                    .route(web::get().to(handlers::auth::me)),
            ),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.service(
        web::scope("/user")
            .wrap(token_guard(registry))
            .service(
                web::resource("")
                    .route(web::get().to(handlers::users::find_users))
                    .route(web::post().to(handlers::users::create_user)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::users::get_user))
                    .route(web::put().to(handlers::users::update_user))
                    .route(web::delete().to(handlers::users::delete_user)),
            ),
    );
}

fn configure_post_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.service(
        web::scope("/post")
            .wrap(token_guard(registry))
            .service(
                web::resource("")
                    .route(web::get().to(handlers::posts::find_posts))
                    .route(web::post().to(handlers::posts::create_post)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::posts::get_post))
                    .route(web::put().to(handlers::posts::update_post))
                    .route(web::delete().to(handlers::posts::delete_post)),
            ),
    );
}

fn configure_comment_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.service(
        web::scope("/comment")
            .wrap(token_guard(registry))
            .service(
                web::resource("")
                    .route(web::get().to(handlers::comments::find_comments))
                    .route(web::post().to(handlers::comments::create_comment)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::comments::get_comment))
                    .route(web::put().to(handlers::comments::update_comment))
                    .route(web::delete().to(handlers::comments::delete_comment)),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "blog_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
