//! # Service Registry - 명시적 의존성 조립
//!
//! 애플리케이션 시작 시 저장소 묶음과 설정으로 모든 서비스를 한 번 생성하고,
//! `web::Data<ServiceRegistry>`로 핸들러에 공유합니다.
//! 전역 컨테이너나 지연 초기화 없이, 의존성은 생성자 인자로만 전달됩니다.
//!
//! ## 의존성 그래프
//!
//! ```text
//! Stores ──┬──────────────► UserService ◄── PasswordService
//!          ├──────────────► PostService
//!          ├──────────────► CommentService
//!          └── users ─────► AuthService ◄── PasswordService, TokenService
//!
//! TokenService ──► TokenGuard
//! AuthService  ──► CredentialGuard
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let stores = Stores::in_memory();
//! let registry = ServiceRegistry::from_env(stores);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| configure_all_routes(cfg, &registry))
//! })
//! ```

use std::sync::Arc;

use log::info;

use crate::repositories::Stores;
use crate::services::auth::{AuthService, PasswordService, TokenService};
use crate::services::comments::CommentService;
use crate::services::posts::PostService;
use crate::services::users::UserService;

/// 애플리케이션 서비스 묶음
///
/// 모든 필드가 `Arc`이므로 워커마다 복제해도 같은 인스턴스를 공유합니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
}

impl ServiceRegistry {
    /// 주어진 저장소와 보안 구성 요소로 서비스를 조립합니다.
    pub fn new(stores: Stores, passwords: PasswordService, tokens: TokenService) -> Self {
        let passwords = Arc::new(passwords);
        let tokens = Arc::new(tokens);

        Self {
            auth: Arc::new(AuthService::new(
                stores.users.clone(),
                passwords.clone(),
                tokens.clone(),
            )),
            tokens,
            users: Arc::new(UserService::new(stores.clone(), passwords)),
            posts: Arc::new(PostService::new(stores.clone())),
            comments: Arc::new(CommentService::new(stores)),
        }
    }

    /// 환경 변수 설정(`BCRYPT_COST`, `JWT_SECRET`, `JWT_EXPIRATION_SECONDS`)으로 조립합니다.
    pub fn from_env(stores: Stores) -> Self {
        let passwords = PasswordService::from_env();
        let tokens = TokenService::from_env();
        info!(
            "서비스 레지스트리 초기화: bcrypt cost={}, token ttl={}s",
            passwords.cost(),
            tokens.ttl_seconds()
        );

        Self::new(stores, passwords, tokens)
    }
}
