use serde::Serialize;

use crate::catalog::{self, DEFAULT_RATING, DOMAIN_COUNT, DomainDef, MAX_RATING, MIN_RATING};

/// A single 1..=5 answer. Only constructible through [`Rating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const DEFAULT: Rating = Rating(DEFAULT_RATING);

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Validated ratings for every domain, stored in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSheet {
    values: [Rating; DOMAIN_COUNT],
}

impl RatingSheet {
    pub fn from_array(values: [Rating; DOMAIN_COUNT]) -> Self {
        Self { values }
    }

    pub fn uniform(rating: Rating) -> Self {
        Self {
            values: [rating; DOMAIN_COUNT],
        }
    }

    pub fn get(&self, idx: usize) -> Rating {
        self.values[idx]
    }

    pub fn total(&self) -> u32 {
        self.values.iter().map(|r| r.get() as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static DomainDef, Rating)> + '_ {
        catalog::domains().iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rating.rs"]
mod tests;
