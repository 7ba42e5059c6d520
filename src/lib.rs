//! # trove
//!
//! A small HTTP service over read-only, in-memory catalogs of movies, books
//! and pokemon, plus a handful of plain-text tutorial endpoints.
//!
//! Fixtures are loaded once into a [`Catalog`], shared through an `Arc`, and
//! never mutated. Handlers filter and sort with straight-line predicates;
//! a bare `/movies` returns a random sample drawn by [`sample::sample`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trove::{Catalog, Server, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), trove::Error> {
//!     let catalog = Arc::new(Catalog::embedded()?);
//!     let app = routes::app(catalog, Some("s3cret"));
//!     Server::bind(([0, 0, 0, 0], 8000)).serve(app).await
//! }
//! ```
//!
//! The request pipeline is hyper → [`Router::call`] → middleware →
//! handler. Handlers are plain `async fn(Request) -> impl IntoResponse`;
//! returning `Result<_, Error>` turns the first bad parameter into a 400.

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod catalog;
pub mod config;
pub mod middleware;
pub mod routes;
pub mod sample;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
