//! Middleware layer.
//!
//! A middleware is any `async fn(Request, Next) -> impl IntoResponse`. It
//! sees the request before the handler and the response after, and may
//! answer on its own without calling [`Next::run`] (that is how
//! [`bearer_auth`] rejects a request).
//!
//! Layers run in registration order, outermost first:
//!
//! ```rust,no_run
//! use trove::{Method, Router, middleware};
//! # async fn movies(_: trove::Request) -> &'static str { "" }
//! let app = Router::new()
//!     .layer(middleware::trace)
//!     .layer(middleware::bearer_auth("s3cret"))
//!     .on(Method::Get, "/movies", movies);
//! ```
//!
//! Built-in middleware:
//! - [`trace`]: one log line per request with method, path, status, latency
//! - [`bearer_auth`]: `Authorization: Bearer <token>` gate, 401 otherwise

mod auth;
mod trace;

use std::future::Future;
use std::sync::Arc;

use crate::handler::{BoxFuture, BoxedHandler, boxed};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub use auth::bearer_auth;
pub use trace::trace;

// ── Type erasure ──────────────────────────────────────────────────────────────

#[doc(hidden)]
pub type BoxedMiddleware = Arc<dyn Fn(Request, Next) -> BoxFuture + Send + Sync + 'static>;

/// Implemented for every `async fn(Request, Next) -> impl IntoResponse`.
pub trait Middleware: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_middleware(self) -> BoxedMiddleware;
}

impl<F, Fut, R> Middleware for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_middleware(self) -> BoxedMiddleware {
        Arc::new(move |req: Request, next: Next| boxed(self(req, next)))
    }
}

// ── Next ──────────────────────────────────────────────────────────────────────

/// The rest of the chain: the remaining layers, then the handler.
pub struct Next {
    chain: Arc<[BoxedMiddleware]>,
    index: usize,
    handler: BoxedHandler,
}

impl Next {
    pub(crate) fn new(chain: Arc<[BoxedMiddleware]>, handler: BoxedHandler) -> Self {
        Self { chain, index: 0, handler }
    }

    /// Passes the request one step inward and returns what comes back.
    pub async fn run(self, req: Request) -> Response {
        let layer = self.chain.get(self.index).cloned();
        match layer {
            Some(layer) => {
                let next = Next { chain: self.chain, index: self.index + 1, handler: self.handler };
                layer(req, next).await
            }
            None => (self.handler)(req).await,
        }
    }
}
