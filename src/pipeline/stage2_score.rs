use tracing::info;

use crate::catalog;
use crate::model::bands::Band;
use crate::model::error::ScoreError;
use crate::model::rating::RatingSheet;
use crate::model::scores::ScoreResult;
use crate::pipeline::stage1_validate::validate;

/// Sum the sheet, scale it to a percentage of the fixed maximum and pick the band.
pub fn score_sheet(sheet: &RatingSheet) -> ScoreResult {
    let total = sheet.total();
    let max_total = catalog::max_total();
    // Multiply first so threshold totals (36, 27, 18) land exactly on 80/60/40.
    let percentage = (100 * total) as f64 / max_total as f64;
    let band = Band::from_percentage(percentage);

    info!(
        total,
        max_total,
        percentage,
        band = band.label(),
        "computed happiness index"
    );

    ScoreResult {
        total,
        max_total,
        percentage,
        band,
        ratings: *sheet,
    }
}

pub fn score(raw: &[(String, i64)]) -> Result<ScoreResult, ScoreError> {
    let sheet = validate(raw)?;
    Ok(score_sheet(&sheet))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
