use std::num::IntErrorKind;

use crate::catalog::{self, DEFAULT_RATING};
use crate::input::InputError;
use crate::pipeline::stage1_validate::RawRatings;

/// Parse one `domain=value` argument. Range checks happen during validation.
pub fn parse_rating_pair(arg: &str) -> Result<(String, i64), InputError> {
    let Some((key, value)) = arg.split_once('=') else {
        return Err(InputError::InvalidInput(format!(
            "expected DOMAIN=VALUE, got '{arg}'"
        )));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "missing domain in '{arg}'"
        )));
    }
    let value = value.trim();
    let value = value.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::InvalidInput(format!("rating for '{key}' is out of range: '{value}'"))
        }
        _ => InputError::Parse(format!("rating for '{key}' is not an integer: '{value}'")),
    })?;
    Ok((key.to_string(), value))
}

/// Append the default rating for every catalog domain not named in `raw`.
pub fn fill_defaults(raw: &mut RawRatings) {
    let mut present = [false; catalog::DOMAIN_COUNT];
    for (key, _) in raw.iter() {
        if let Some(idx) = catalog::lookup(key) {
            present[idx] = true;
        }
    }
    for (idx, seen) in present.iter().enumerate() {
        if !seen {
            raw.push((catalog::domain(idx).id.to_string(), DEFAULT_RATING as i64));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/pairs.rs"]
mod tests;
