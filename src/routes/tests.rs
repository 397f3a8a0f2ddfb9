//! 라우트 테이블 전체를 메모리 저장소 위에서 구동하는 HTTP 테스트
//!
//! 매 테스트마다 사용자 2명, 게시글 2개, 댓글 4개를 새로 심습니다.

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use super::configure_all_routes;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::comments::CommentCreateRequest;
use crate::domain::dto::posts::PostCreateRequest;
use crate::domain::dto::users::UserCreateRequest;
use crate::repositories::Stores;
use crate::services::auth::{PasswordService, TokenService};

/// 저장소를 비우고 사용자 2명, 게시글 2개, 댓글 4개를 심습니다.
async fn reseed(stores: &Stores, registry: &ServiceRegistry) {
    stores.reset().await.unwrap();

    for (email, password) in [("admin@test.com", "111111"), ("user@test.com", "222222")] {
        registry
            .users
            .create(UserCreateRequest {
                email: email.to_string(),
                password: password.to_string(),
                name: None,
            })
            .await
            .unwrap();
    }

    for (user_id, title, published) in [(1, "Post By User 1", false), (2, "Post By User 2", true)] {
        registry
            .posts
            .create(
                user_id,
                PostCreateRequest {
                    title: title.to_string(),
                    content: None,
                    published,
                },
            )
            .await
            .unwrap();
    }

    for (user_id, post_id, text) in [
        (1, 1, "Comment 1"),
        (2, 1, "Comment 2"),
        (1, 2, "Comment 3"),
        (2, 2, "Comment 4"),
    ] {
        registry
            .comments
            .create(
                user_id,
                CommentCreateRequest {
                    text: text.to_string(),
                    post_id,
                },
            )
            .await
            .unwrap();
    }
}

fn registry_over(stores: &Stores) -> ServiceRegistry {
    ServiceRegistry::new(
        stores.clone(),
        PasswordService::new(4),
        TokenService::new("test-secret", 300),
    )
}

async fn seeded_registry() -> ServiceRegistry {
    let stores = Stores::in_memory();
    let registry = registry_over(&stores);
    reseed(&stores, &registry).await;
    registry
}

fn bearer(registry: &ServiceRegistry, user_id: i64, email: &str) -> (&'static str, String) {
    let token = registry.tokens.issue(user_id, email).unwrap();
    ("Authorization", format!("Bearer {}", token))
}

fn admin(registry: &ServiceRegistry) -> (&'static str, String) {
    bearer(registry, 1, "admin@test.com")
}

#[actix_web::test]
async fn test_health_check() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_register() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "new@test.com", "password": "333333", "name": "New" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    let token = body["accessToken"].as_str().unwrap();
    let claims = registry.tokens.verify(token).unwrap();
    assert_eq!(claims.sub, 3);
    assert_eq!(claims.email, "new@test.com");

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "admin@test.com", "password": "333333" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Email already exists");

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "not-an-email", "password": "333333" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_login() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "user@test.com", "password": "222222" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    let claims = registry
        .tokens
        .verify(body["accessToken"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, 2);
    assert_eq!(claims.email, "user@test.com");

    for credentials in [
        json!({ "email": "user@test.com", "password": "111111" }),
        json!({ "email": "ghost@test.com", "password": "222222" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(credentials)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Incorrect email or password");
    }
}

#[actix_web::test]
async fn test_me() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::get().uri("/auth/me").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "admin@test.com");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer(&registry, 99, "gone@test.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_resources_require_token() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    for uri in ["/user", "/post/1", "/comment"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn test_user_pagination() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::get()
        .uri("/user?page=2&pageSize=1")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["email"], "user@test.com");
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "pageSize": 1, "totalItem": 2, "totalPage": 2 })
    );

    let req = test::TestRequest::get()
        .uri("/user?page=xx32&pageSize=13dff0")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "pageSize": 13, "totalItem": 2, "totalPage": 1 })
    );

    let req = test::TestRequest::get()
        .uri("/user?page=5")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_user_update_rehashes_password() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::put()
        .uri("/user/2")
        .insert_header(admin(&registry))
        .set_json(json!({ "id": 50, "password": "newpass" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 2);
    assert!(body.get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "user@test.com", "password": "newpass" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/user/42")
        .insert_header(admin(&registry))
        .set_json(json!({ "name": "Nobody" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_post_get_by_id() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::get()
        .uri("/post/2")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let stored = registry.posts.get_by_id(2).await.unwrap();
    assert_eq!(body, serde_json::to_value(&stored).unwrap());
    assert_eq!(body["title"], "Post By User 2");
    assert_eq!(body["published"], true);
    assert_eq!(body["userId"], 2);

    let req = test::TestRequest::get()
        .uri("/post/999")
        .insert_header(admin(&registry))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "error": "not_found", "message": "Post not found" }));

    let req = test::TestRequest::get()
        .uri("/post/abc")
        .insert_header(admin(&registry))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_post_list_with_joins() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::get()
        .uri("/post?joins=user&joins=comments")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first = &body["data"][0];
    assert_eq!(first["user"]["email"], "admin@test.com");
    assert_eq!(first["comments"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/post")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"][0].get("user").is_none());

    let req = test::TestRequest::get()
        .uri("/post?joins=author")
        .insert_header(admin(&registry))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_post_create_uses_token_user() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::post()
        .uri("/post")
        .insert_header(bearer(&registry, 2, "user@test.com"))
        .set_json(json!({ "title": "Fresh", "published": true }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["userId"], 2);
    assert_eq!(body["content"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/post")
        .insert_header(admin(&registry))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_post_delete_cascades_to_comments() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::delete()
        .uri("/post/1")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Post By User 1");

    let req = test::TestRequest::get()
        .uri("/comment")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalItem"], 2);

    let req = test::TestRequest::delete()
        .uri("/post/1")
        .insert_header(admin(&registry))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_comment_routes() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::post()
        .uri("/comment")
        .insert_header(bearer(&registry, 2, "user@test.com"))
        .set_json(json!({ "text": "bruhhhh", "postId": 2 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["userId"], 2);
    assert_eq!(body["postId"], 2);

    let req = test::TestRequest::post()
        .uri("/comment")
        .insert_header(admin(&registry))
        .set_json(json!({ "text": "orphan", "postId": 99 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Post not found");

    let req = test::TestRequest::get()
        .uri("/comment?joins%5B%5D=post&pageSize=2")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["post"]["title"], "Post By User 1");
    assert_eq!(body["pagination"]["totalPage"], 3);

    let req = test::TestRequest::put()
        .uri("/comment/1")
        .insert_header(admin(&registry))
        .set_json(json!({ "text": "edited" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], "edited");
    assert_eq!(body["postId"], 1);

    let req = test::TestRequest::delete()
        .uri("/comment/77")
        .insert_header(admin(&registry))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Comment not found");
}

#[actix_web::test]
async fn test_user_delete_cascades() {
    let registry = seeded_registry().await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::delete()
        .uri("/user/2")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "user@test.com");

    let req = test::TestRequest::get()
        .uri("/post")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalItem"], 1);

    // 남은 댓글: 사용자 1이 게시글 1에 단 댓글
    let req = test::TestRequest::get()
        .uri("/comment")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalItem"], 1);
    assert_eq!(body["data"][0]["text"], "Comment 1");
}

#[actix_web::test]
async fn test_reset_restores_seed_state() {
    let stores = Stores::in_memory();
    let registry = registry_over(&stores);
    reseed(&stores, &registry).await;
    let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &registry))).await;

    let req = test::TestRequest::post()
        .uri("/post")
        .insert_header(admin(&registry))
        .set_json(json!({ "title": "Extra", "published": false }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 3);

    reseed(&stores, &registry).await;

    let req = test::TestRequest::get()
        .uri("/post")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalItem"], 2);
    assert_eq!(body["data"][1]["id"], 2);

    let req = test::TestRequest::get()
        .uri("/comment?page=2&pageSize=2")
        .insert_header(admin(&registry))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][1]["id"], 4);
    assert_eq!(body["pagination"]["totalItem"], 4);
}
