//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Middleware wraps every
//! request, matched or not, so 404s and 405s are logged and authorized like
//! any other.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{BoxedMiddleware, Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

struct Route {
    pattern: String,
    handler: BoxedHandler,
}

enum Lookup {
    Found(BoxedHandler, String, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each builder call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<Route>>,
    layers: Arc<[BoxedMiddleware]>,
    not_found: BoxedHandler,
    method_not_allowed: BoxedHandler,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            layers: Arc::from(Vec::new()),
            not_found: (|_req: Request| async { Status::NotFound }).into_boxed_handler(),
            method_not_allowed: (|_req: Request| async { Status::MethodNotAllowed })
                .into_boxed_handler(),
        }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if the path is malformed or conflicts with one already
    /// registered. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let route = Route { pattern: path.to_owned(), handler: handler.into_boxed_handler() };
        self.routes
            .entry(method)
            .or_default()
            .insert(path, route)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::Get, ..)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// Append a middleware. The first layer added is the outermost.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        let mut layers = self.layers.to_vec();
        layers.push(middleware.into_boxed_middleware());
        self.layers = layers.into();
        self
    }

    /// Runs one request through the middleware chain and the matched handler.
    ///
    /// Methods outside RFC 9110 are answered `405` right here, without
    /// touching middleware.
    pub async fn call(&self, req: http::Request<Bytes>) -> Response {
        let Ok(method) = Method::try_from(req.method()) else {
            return Response::status(Status::MethodNotAllowed);
        };

        let mut req = Request::new(method, req);
        let handler = match self.lookup(method, req.path()) {
            Lookup::Found(handler, pattern, params) => {
                req.route = Some(pattern);
                req.params = params;
                handler
            }
            Lookup::MethodNotAllowed => Arc::clone(&self.method_not_allowed),
            Lookup::NotFound => Arc::clone(&self.not_found),
        };

        Next::new(Arc::clone(&self.layers), handler).run(req).await
    }

    /// `HEAD` falls back to the `GET` route when no explicit one exists;
    /// hyper strips the body on the way out.
    fn lookup(&self, method: Method, path: &str) -> Lookup {
        let at = |m: Method| self.routes.get(&m).and_then(|tree| tree.at(path).ok());
        let found = at(method).or_else(|| match method {
            Method::Head => at(Method::Get),
            _ => None,
        });
        if let Some(matched) = found {
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(
                Arc::clone(&matched.value.handler),
                matched.value.pattern.clone(),
                params,
            );
        }

        let elsewhere = self.routes.iter()
            .any(|(m, tree)| *m != method && tree.at(path).is_ok());
        if elsewhere { Lookup::MethodNotAllowed } else { Lookup::NotFound }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::Next;

    fn request(method: &str, uri: &str) -> http::Request<Bytes> {
        http::Request::builder().method(method).uri(uri).body(Bytes::new()).unwrap()
    }

    async fn kind(req: Request) -> String {
        format!("{} via {}", req.param("kind").unwrap_or("?"), req.route().unwrap_or("?"))
    }

    #[tokio::test]
    async fn matches_params_and_records_the_route() {
        let app = Router::new().get("/pizza/{kind}", kind);
        let res = app.call(request("GET", "/pizza/pepperoni")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"pepperoni via /pizza/{kind}");
    }

    #[tokio::test]
    async fn distinguishes_404_from_405() {
        let app = Router::new().get("/books", kind);
        assert_eq!(app.call(request("GET", "/nope")).await.status_code(), 404);
        assert_eq!(app.call(request("POST", "/books")).await.status_code(), 405);
        assert_eq!(app.call(request("PURGE", "/books")).await.status_code(), 405);
    }

    #[tokio::test]
    async fn head_is_served_by_the_get_route() {
        let app = Router::new().get("/pizza/{kind}", kind);
        let res = app.call(request("HEAD", "/pizza/pineapple")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(app.call(request("HEAD", "/salad")).await.status_code(), 404);
    }

    #[tokio::test]
    async fn layers_run_outermost_first() {
        async fn outer(req: Request, next: Next) -> Response {
            let res = next.run(req).await;
            Response::text(format!("outer({})", String::from_utf8_lossy(res.body())))
        }
        async fn inner(req: Request, next: Next) -> Response {
            let res = next.run(req).await;
            Response::text(format!("inner({})", String::from_utf8_lossy(res.body())))
        }

        let app = Router::new()
            .layer(outer)
            .layer(inner)
            .get("/", |_req: Request| async { "core" });
        let res = app.call(request("GET", "/")).await;
        assert_eq!(res.body(), b"outer(inner(core))");

        // Unmatched paths still pass through every layer.
        let res = app.call(request("GET", "/missing")).await;
        assert_eq!(res.body(), b"outer(inner())");
    }
}
