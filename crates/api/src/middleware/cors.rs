//! Permissive CORS decorator.
//!
//! The contract is a fixed header set on *every* response — including
//! non-preflight ones — plus an OPTIONS short-circuit that answers 200
//! with an empty body and never reaches the wrapped application. That
//! is stricter than negotiated CORS, so this is a hand-written layer
//! rather than an off-the-shelf one.

use axum::body::Body;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// The fixed header set injected on every response.
fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(
                "Origin, Accept, Content-Type, X-Requested-With, X-CSRF-Token",
            ),
        ),
    ]
}

/// Layer wrapping the application in the CORS decorator.
#[derive(Clone, Default)]
pub struct CorsLayer;

impl CorsLayer {
    /// Create the layer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService { inner }
    }
}

/// Service injecting CORS headers and short-circuiting preflights.
#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for CorsService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if req.method() == Method::OPTIONS {
            // Preflight never reaches the wrapped application.
            let mut res = Response::new(Body::empty());
            *res.status_mut() = StatusCode::OK;
            res.headers_mut()
                .insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
            for (name, value) in cors_headers() {
                res.headers_mut().append(name, value);
            }
            return Box::pin(std::future::ready(Ok(res)));
        }

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let mut res = inner.call(req).await?;
            // Appended after the application picked its own headers;
            // status and body pass through untouched.
            for (name, value) in cors_headers() {
                res.headers_mut().append(name, value);
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/hello", get(|| async { "hi" }))
            .layer(CorsLayer::new())
    }

    #[tokio::test]
    async fn test_options_short_circuit() {
        let res = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/anything-at-all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_LENGTH], "0");
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            res.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            res.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Origin, Accept, Content-Type, X-Requested-With, X-CSRF-Token"
        );

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_passes_through_with_headers() {
        let res = app()
            .oneshot(
                Request::builder()
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"hi");
    }

    #[tokio::test]
    async fn test_status_untouched_for_non_options() {
        let res = app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Inner 404 passes through, headers still appended.
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
