//! GET /movies

use std::sync::Arc;

use rand::Rng;

use crate::catalog::{Catalog, Movie, MovieFilter};
use crate::error::{Error, Result};
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::sample::sample_indices;

/// How many movies a bare `/movies` returns.
const RANDOM_PICKS: usize = 10;

/// Filters movies by any of `film_title`, `country`, `actors`, `genre` and
/// `avg_vote`. With no query string at all, returns a random handful.
pub async fn list(catalog: Arc<Catalog>, req: Request) -> Result<Response> {
    if req.query_pairs().is_empty() {
        let picks = random_movies(&catalog.movies, &mut rand::thread_rng());
        return Ok(Json(picks).into_response());
    }

    let filter = filter_from(&req)?;
    Ok(Json(filter.apply(&catalog.movies)).into_response())
}

fn filter_from(req: &Request) -> Result<MovieFilter> {
    let min_avg_vote = req
        .query("avg_vote")
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::invalid("avg_vote must be a number"))
        })
        .transpose()?;

    let text = |key: &str| req.query(key).map(str::to_owned);
    Ok(MovieFilter {
        film_title: text("film_title"),
        country: text("country"),
        actors: text("actors"),
        genre: text("genre"),
        min_avg_vote,
    })
}

fn random_movies<'a, R: Rng + ?Sized>(movies: &'a [Movie], rng: &mut R) -> Vec<&'a Movie> {
    sample_indices(movies.len(), RANDOM_PICKS, rng)
        .into_iter()
        .filter_map(|i| movies.get(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_pick_is_distinct_and_capped() {
        let movies = Catalog::embedded().unwrap().movies;
        let mut rng = StdRng::seed_from_u64(11);

        let picks = random_movies(&movies, &mut rng);
        assert_eq!(picks.len(), RANDOM_PICKS.min(movies.len()));
        let mut titles: Vec<_> = picks.iter().map(|m| &m.film_title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), picks.len());

        assert_eq!(random_movies(&movies[..3], &mut rng).len(), 3);
        assert!(random_movies(&[], &mut rng).is_empty());
    }
}
