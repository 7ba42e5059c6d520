use serde::{Deserialize, Serialize};

use super::contains_ci;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub film_title: String,
    pub year: u16,
    pub genre: String,
    pub duration: u16,
    pub country: String,
    pub director: String,
    pub actors: String,
    pub avg_vote: f64,
    pub votes: u32,
}

/// Optional predicates over movies, combined with AND.
///
/// Text fields match case-insensitive substrings; `min_avg_vote` keeps
/// movies rated at or above the threshold. `None` constrains nothing.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub film_title: Option<String>,
    pub country: Option<String>,
    pub actors: Option<String>,
    pub genre: Option<String>,
    pub min_avg_vote: Option<f64>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        let text = |wanted: &Option<String>, field: &str| {
            wanted.as_deref().is_none_or(|w| contains_ci(field, w))
        };

        text(&self.film_title, &movie.film_title)
            && text(&self.country, &movie.country)
            && text(&self.actors, &movie.actors)
            && text(&self.genre, &movie.genre)
            && self.min_avg_vote.is_none_or(|min| movie.avg_vote >= min)
    }

    /// The matching movies, in catalog order.
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies.iter().filter(|m| self.matches(m)).collect()
    }
}
