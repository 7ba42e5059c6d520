//! GET /books

use std::sync::Arc;

use crate::catalog::{Catalog, SortKey, search_books};
use crate::error::Result;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

/// `search` narrows by title; `sort` orders by `title` or `rank`.
pub async fn list(catalog: Arc<Catalog>, req: Request) -> Result<Response> {
    let sort = req.query("sort").map(str::parse::<SortKey>).transpose()?;
    let found = search_books(&catalog.books, req.query("search"), sort);
    Ok(Json(found).into_response())
}
