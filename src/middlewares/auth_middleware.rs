//! 가드 기반 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 [`Guard`]를 실행하고 인증 주체를 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::GuardMiddlewareService;
use crate::middlewares::guard::Guard;

/// 인증 필수 미들웨어
///
/// 가드가 실패하면 핸들러에 도달하지 않고 401 에러 본문으로 응답합니다.
///
/// ```rust,ignore
/// web::scope("/post")
///     .wrap(RequireGuard::new(TokenGuard::new(registry.tokens.clone())))
///     .route("", web::get().to(find_posts))
/// ```
pub struct RequireGuard<G> {
    guard: Rc<G>,
}

impl<G: Guard> RequireGuard<G> {
    pub fn new(guard: G) -> Self {
        Self {
            guard: Rc::new(guard),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B, G> Transform<S, ServiceRequest> for RequireGuard<G>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    G: Guard,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = GuardMiddlewareService<S, G>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GuardMiddlewareService {
            service: Rc::new(service),
            guard: self.guard.clone(),
        }))
    }
}
