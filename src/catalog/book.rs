use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::contains_ci;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub rank: u32,
    pub title: String,
    pub author: String,
}

/// The fields books can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Rank,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "rank" => Ok(Self::Rank),
            _ => Err(Error::invalid("Sort must be one of title or rank")),
        }
    }
}

impl SortKey {
    fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            Self::Title => three_way(&a.title, &b.title),
            Self::Rank => three_way(&a.rank, &b.rank),
        }
    }
}

fn three_way<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Books whose title contains `search` (case-insensitive), optionally sorted
/// ascending by `sort`. Equal keys come out in no particular order.
pub fn search_books<'a>(books: &'a [Book], search: Option<&str>, sort: Option<SortKey>) -> Vec<&'a Book> {
    let mut found: Vec<&Book> = books
        .iter()
        .filter(|b| search.is_none_or(|s| contains_ci(&b.title, s)))
        .collect();
    if let Some(key) = sort {
        found.sort_unstable_by(|a, b| key.compare(a, b));
    }
    found
}
