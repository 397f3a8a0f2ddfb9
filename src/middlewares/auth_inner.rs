//! RequireGuard 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::middlewares::guard::Guard;

/// 가드를 실행한 뒤 다음 서비스를 호출하는 서비스
pub struct GuardMiddlewareService<S, G> {
    pub service: Rc<S>,
    pub guard: Rc<G>,
}

impl<S, B, G> Service<ServiceRequest> for GuardMiddlewareService<S, G>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    G: Guard,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let guard = self.guard.clone();

        Box::pin(async move {
            match guard.authenticate(&mut req).await {
                Ok(identity) => {
                    // 인증 주체를 Request Extensions에 저장
                    req.extensions_mut().insert(identity);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = err.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
