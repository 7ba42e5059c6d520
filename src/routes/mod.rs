//! The route table.

mod basics;
mod books;
mod movies;
mod pokemon;

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::catalog::Catalog;
use crate::handler::Handler;
use crate::middleware;
use crate::request::Request;
use crate::response::IntoResponse;
use crate::router::Router;

/// Builds the full application: request logging, bearer auth when a token
/// is given, then every route.
pub fn app(catalog: Arc<Catalog>, api_token: Option<&str>) -> Router {
    let mut router = Router::new().layer(middleware::trace);
    match api_token {
        Some(token) => router = router.layer(middleware::bearer_auth(token)),
        None => warn!("no API token configured, requests are not authorized"),
    }

    router
        .get("/", basics::hello)
        .get("/burgers", basics::burgers)
        .get("/pizza", basics::pizza)
        .get("/pizza/pepperoni", basics::pepperoni)
        .get("/pizza/pineapple", basics::pineapple)
        .get("/salad", basics::salad)
        .get("/204", basics::no_content)
        .get("/echo", basics::echo)
        .get("/video", basics::video)
        .get("/queryviewer", basics::query_viewer)
        .get("/greetings", basics::greetings)
        .get("/grade", basics::grade)
        .get("/test", basics::hello_world)
        .get("/movies", with_catalog(Arc::clone(&catalog), movies::list))
        .get("/books", with_catalog(Arc::clone(&catalog), books::list))
        .get("/types", pokemon::types)
        .get("/pokemon", with_catalog(Arc::clone(&catalog), pokemon::list))
}

/// Binds a handler that needs the catalog to a shared copy of it.
fn with_catalog<F, Fut, R>(catalog: Arc<Catalog>, f: F) -> impl Handler
where
    F: Fn(Arc<Catalog>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    move |req: Request| f(Arc::clone(&catalog), req)
}
