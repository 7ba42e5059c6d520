use serde::{Deserialize, Serialize};

use super::contains_ci;
use crate::error::{Error, Result};

/// Every type a pokemon can have, in the canonical spelling.
pub const POKEMON_TYPES: [&str; 18] = [
    "Bug", "Dark", "Dragon", "Electric", "Fairy", "Fighting", "Fire", "Flying", "Ghost",
    "Grass", "Ground", "Ice", "Normal", "Poison", "Psychic", "Rock", "Steel", "Water",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
}

/// Resolves a user-supplied type to its canonical spelling, ignoring case.
pub fn canonical_type(raw: &str) -> Result<&'static str> {
    POKEMON_TYPES
        .iter()
        .find(|t| t.eq_ignore_ascii_case(raw))
        .copied()
        .ok_or_else(|| Error::invalid("Type is not valid"))
}

#[derive(Debug, Clone, Default)]
pub struct PokemonFilter<'q> {
    pub name: Option<&'q str>,
    pub kind: Option<&'static str>,
}

impl PokemonFilter<'_> {
    pub fn matches(&self, p: &Pokemon) -> bool {
        self.name.is_none_or(|n| contains_ci(&p.name, n))
            && self.kind.is_none_or(|k| p.types.iter().any(|t| t.eq_ignore_ascii_case(k)))
    }

    pub fn apply<'a>(&self, pokedex: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        pokedex.iter().filter(|p| self.matches(p)).collect()
    }
}
