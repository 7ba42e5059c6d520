//! The read-only datasets served by trove.
//!
//! Everything is loaded once at startup into a [`Catalog`] and never
//! mutated afterwards. Handlers receive it through an `Arc`.

mod book;
mod movie;
mod pokemon;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Error, Result};

pub use book::{Book, SortKey, search_books};
pub use movie::{Movie, MovieFilter};
pub use pokemon::{POKEMON_TYPES, Pokemon, PokemonFilter, canonical_type};

const MOVIES_FILE: &str = "movies.json";
const BOOKS_FILE: &str = "books.json";
const POKEDEX_FILE: &str = "pokedex.json";

const EMBEDDED_MOVIES: &str = include_str!("../../data/movies.json");
const EMBEDDED_BOOKS: &str = include_str!("../../data/books.json");
const EMBEDDED_POKEDEX: &str = include_str!("../../data/pokedex.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub books: Vec<Book>,
    pub pokemon: Vec<Pokemon>,
}

impl Catalog {
    /// The fixtures compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            movies: decode(MOVIES_FILE, EMBEDDED_MOVIES)?,
            books: decode(BOOKS_FILE, EMBEDDED_BOOKS)?,
            pokemon: decode(POKEDEX_FILE, EMBEDDED_POKEDEX)?,
        })
    }

    /// Reads `movies.json`, `books.json` and `pokedex.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            std::fs::read_to_string(dir.join(name)).map_err(|e| {
                Error::Io(std::io::Error::new(e.kind(), format!("{}: {e}", dir.join(name).display())))
            })
        };
        Ok(Self {
            movies: decode(MOVIES_FILE, &read(MOVIES_FILE)?)?,
            books: decode(BOOKS_FILE, &read(BOOKS_FILE)?)?,
            pokemon: decode(POKEDEX_FILE, &read(POKEDEX_FILE)?)?,
        })
    }

    /// `from_dir` when a directory is given, the embedded fixtures otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let catalog = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };
        info!(
            movies = catalog.movies.len(),
            books = catalog.books.len(),
            pokemon = catalog.pokemon.len(),
            source = dir.map_or_else(|| "embedded".to_owned(), |d| d.display().to_string()),
            "catalog loaded",
        );
        Ok(catalog)
    }
}

fn decode<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| Error::Fixture { name: name.to_owned(), source })
}

/// Case-insensitive substring test used by every text predicate.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
