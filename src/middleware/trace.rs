use std::time::Instant;

use tracing::info;

use super::Next;
use crate::request::Request;
use crate::response::Response;

/// Logs `GET /movies?genre=drama 200 0.412 ms - 1834` style lines as
/// structured fields.
pub async fn trace(req: Request, next: Next) -> Response {
    let method = req.method();
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
    let started = Instant::now();

    let res = next.run(req).await;

    info!(
        %method,
        uri = %uri,
        status = res.status_code(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        bytes = res.body().len(),
        "request",
    );
    res
}
