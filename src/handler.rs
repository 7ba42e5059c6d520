//! Handler trait and type erasure.
//!
//! Route handlers and middleware are both stored as `Arc<dyn Fn(..) -> BoxFuture>`.
//! [`boxed`] is the one place where a concrete future is wrapped, its output
//! converted with [`IntoResponse`], and pinned on the heap.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
#[doc(hidden)]
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// Erases a handler or middleware future.
pub(crate) fn boxed<Fut, R>(fut: Fut) -> BoxFuture
where
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    Box::pin(async move { fut.await.into_response() })
}

/// Implemented for every `async fn(Request) -> impl IntoResponse`, and for
/// closures of the same shape (e.g. ones capturing an `Arc<Catalog>`).
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(move |req: Request| boxed(self(req)))
    }
}
