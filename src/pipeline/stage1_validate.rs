use tracing::warn;

use crate::catalog::{self, DOMAIN_COUNT};
use crate::model::error::ScoreError;
use crate::model::rating::{Rating, RatingSheet};

/// Raw `(key, value)` pairs as collected from any input source, in input order.
pub type RawRatings = Vec<(String, i64)>;

pub fn validate(raw: &[(String, i64)]) -> Result<RatingSheet, ScoreError> {
    let result = validate_inner(raw);
    if let Err(err) = &result {
        warn!("rejected ratings: {err}");
    }
    result
}

fn validate_inner(raw: &[(String, i64)]) -> Result<RatingSheet, ScoreError> {
    let mut slots: [Option<Rating>; DOMAIN_COUNT] = [None; DOMAIN_COUNT];

    for (key, value) in raw {
        let idx = catalog::lookup(key).ok_or_else(|| ScoreError::UnknownDomain(key.clone()))?;
        let domain = catalog::domain(idx).id;
        if slots[idx].is_some() {
            return Err(ScoreError::DuplicateDomain(domain));
        }
        let rating = Rating::new(*value).ok_or(ScoreError::OutOfRange {
            domain,
            value: *value,
        })?;
        slots[idx] = Some(rating);
    }

    let mut values = [Rating::DEFAULT; DOMAIN_COUNT];
    for (idx, slot) in slots.iter().enumerate() {
        values[idx] = slot.ok_or(ScoreError::MissingDomain(catalog::domain(idx).id))?;
    }
    Ok(RatingSheet::from_array(values))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
