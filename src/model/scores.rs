use crate::model::bands::Band;
use crate::model::rating::RatingSheet;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub total: u32,
    pub max_total: u32,
    pub percentage: f64,
    pub band: Band,
    pub ratings: RatingSheet,
}

impl ScoreResult {
    pub fn percentage_display(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}
