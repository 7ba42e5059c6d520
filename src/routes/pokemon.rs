//! GET /types and GET /pokemon

use std::sync::Arc;

use crate::catalog::{Catalog, POKEMON_TYPES, PokemonFilter, canonical_type};
use crate::error::Result;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

pub async fn types(_req: Request) -> Json<[&'static str; 18]> {
    Json(POKEMON_TYPES)
}

/// `name` narrows by name; `type` must be one of [`POKEMON_TYPES`].
pub async fn list(catalog: Arc<Catalog>, req: Request) -> Result<Response> {
    let kind = req.query("type").map(canonical_type).transpose()?;
    let filter = PokemonFilter { name: req.query("name"), kind };
    Ok(Json(filter.apply(&catalog.pokemon)).into_response())
}
