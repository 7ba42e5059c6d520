//! Fixed bearer-token authorization.

use std::sync::Arc;

use tracing::warn;

use super::{Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

const UNAUTHORIZED_BODY: &[u8] = br#"{"error":"Unauthorized request"}"#;

/// Rejects any request whose `Authorization` header is not exactly
/// `Bearer <token>` with `401` and a JSON error body. The handler never runs.
pub fn bearer_auth(token: &str) -> impl Middleware + use<> {
    let expected: Arc<str> = Arc::from(token);
    move |req: Request, next: Next| {
        let expected = Arc::clone(&expected);
        async move {
            let presented = req
                .header("authorization")
                .and_then(|v| v.strip_prefix("Bearer "));

            if presented != Some(&*expected) {
                warn!(method = %req.method(), path = req.path(), "unauthorized request");
                return Response::builder()
                    .status(Status::Unauthorized)
                    .header("www-authenticate", "Bearer")
                    .json(UNAUTHORIZED_BODY.to_vec());
            }
            next.run(req).await
        }
    }
}
