//! Bearer-token authentication middleware.
//!
//! Extracts the token from the `Authorization` header, resolves it into
//! an authenticated user through the auth gateway, and injects that user
//! into the request extensions. Every protected route goes through this
//! transform; there is no anonymous property access.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;

use hotelier_core::domain::value_objects::AuthenticatedUser;
use hotelier_core::errors::DomainError;
use hotelier_core::repositories::UserRepository;
use hotelier_core::services::AuthService;
use hotelier_shared::types::ErrorResponse;

use crate::handlers::error::domain_error_response;

/// Dyn-dispatch front for the auth gateway so the middleware does not
/// need the repository type parameter.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, token: &str) -> Result<AuthenticatedUser, DomainError>;
}

#[async_trait]
impl<U: UserRepository + 'static> Authorizer for AuthService<U> {
    async fn authorize(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        AuthService::authorize(self, token).await
    }
}

/// Bearer authentication middleware factory.
#[derive(Default, Clone, Copy)]
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(missing_token_error()),
            };

            let authorizer = match req.app_data::<web::Data<Arc<dyn Authorizer>>>() {
                Some(authorizer) => Arc::clone(authorizer.get_ref()),
                None => {
                    return Err(InternalError::from_response(
                        "authorizer not configured",
                        HttpResponse::InternalServerError().json(ErrorResponse::new(
                            "internal_error",
                            "Authorization is not configured",
                        )),
                    )
                    .into());
                }
            };

            match authorizer.authorize(&token).await {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    service.call(req).await
                }
                Err(error) => {
                    let response = domain_error_response(&error);
                    Err(InternalError::from_response(error, response).into())
                }
            }
        })
    }
}

/// Extracts the bearer token from the `Authorization` header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn missing_token_error() -> Error {
    InternalError::from_response(
        "missing bearer token",
        HttpResponse::Unauthorized().json(ErrorResponse::new(
            "unauthorized",
            "Missing or invalid Authorization header",
        )),
    )
    .into()
}

/// Extractor handing the authenticated user to handlers.
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                InternalError::from_response(
                    "authentication required",
                    HttpResponse::Unauthorized()
                        .json(ErrorResponse::new("unauthorized", "Authentication required")),
                )
                .into()
            });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn extracts_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
