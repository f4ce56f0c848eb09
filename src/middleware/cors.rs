//! CORS response headers middleware implementation.

use crate::config::CorsConfig;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// CORS headers middleware factory
///
/// Adds CORS response headers for requests whose `Origin` is covered by the
/// configured allow-list. Requests from other origins pass through untouched
/// and the browser enforces the policy.
pub struct CorsHeaders {
    config: CorsConfig,
}

impl CorsHeaders {
    /// Create a new CORS headers middleware with the given configuration
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsHeadersMiddleware {
            service,
            config: self.config.clone(),
        }))
    }
}

/// The actual CORS headers middleware service
pub struct CorsHeadersMiddleware<S> {
    service: S,
    config: CorsConfig,
}

impl<S, B> Service<ServiceRequest> for CorsHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let origin = req
            .headers()
            .get("Origin")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let fut = self.service.call(req);
        let config = self.config.clone();

        Box::pin(async move {
            let mut res = fut.await?;

            if !config.enabled {
                return Ok(res);
            }

            let Some(origin) = origin.filter(|origin| config.allows(origin)) else {
                return Ok(res);
            };

            let headers = res.headers_mut();

            if let Ok(value) = HeaderValue::from_str(&origin) {
                headers.insert(
                    HeaderName::from_static("access-control-allow-origin"),
                    value,
                );
            }

            // Allowed origins vary per request, so caches must key on Origin
            headers.insert(HeaderName::from_static("vary"), HeaderValue::from_static("Origin"));

            headers.insert(
                HeaderName::from_static("access-control-allow-methods"),
                HeaderValue::from_static("GET, POST, OPTIONS"),
            );

            headers.insert(
                HeaderName::from_static("access-control-allow-headers"),
                HeaderValue::from_static("Content-Type, X-Request-ID"),
            );

            if config.allow_credentials {
                headers.insert(
                    HeaderName::from_static("access-control-allow-credentials"),
                    HeaderValue::from_static("true"),
                );
            }

            Ok(res)
        })
    }
}
