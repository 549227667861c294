use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::input::InputError;
use crate::pipeline::stage1_validate::RawRatings;

/// Read a JSON object of `domain -> integer rating`.
///
/// Keys are not resolved against the catalog here and values are not range
/// checked; both belong to validation.
pub fn load_ratings_file(path: &Path) -> Result<RawRatings, InputError> {
    let text = std::fs::read_to_string(path)?;
    let raw = parse_ratings_json(&text).map_err(|err| match err {
        InputError::Json { source, .. } => InputError::Json {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), pairs = raw.len(), "loaded ratings file");
    Ok(raw)
}

pub fn parse_ratings_json(text: &str) -> Result<RawRatings, InputError> {
    let value: Value = serde_json::from_str(text).map_err(|source| InputError::Json {
        path: "<inline>".to_string(),
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(InputError::Parse(
            "ratings file must contain a JSON object".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rating = rating_from_value(&key, &value)?;
        out.push((key, rating));
    }
    Ok(out)
}

fn rating_from_value(key: &str, value: &Value) -> Result<i64, InputError> {
    if let Some(rating) = value.as_i64() {
        return Ok(rating);
    }
    // Integers beyond i64 arrive as u64, or as a whole f64 past u64::MAX.
    let whole_overflow = value.is_u64()
        || value
            .as_f64()
            .is_some_and(|f| f.fract() == 0.0 && f.abs() >= i64::MAX as f64);
    if whole_overflow {
        Err(InputError::InvalidInput(format!(
            "rating for '{key}' is out of range: {value}"
        )))
    } else {
        Err(InputError::Parse(format!(
            "rating for '{key}' is not an integer: {value}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/file.rs"]
mod tests;
