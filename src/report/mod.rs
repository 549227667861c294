use serde::Serialize;

use crate::model::bands::Band;
use crate::model::scores::ScoreResult;

pub mod chart;
pub mod json;
pub mod text;

pub const TOOL_NAME: &str = "gnh-index";

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRating {
    pub id: &'static str,
    pub name: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub total: u32,
    pub max_total: u32,
    pub percentage: f64,
    pub index: String,
    pub category: Band,
    pub interpretation: &'static str,
    pub ratings: Vec<DomainRating>,
}

pub fn build_summary(result: &ScoreResult) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
        },
        total: result.total,
        max_total: result.max_total,
        percentage: result.percentage,
        index: result.percentage_display(),
        category: result.band,
        interpretation: result.band.interpretation(),
        ratings: domain_ratings(result),
    }
}

pub fn domain_ratings(result: &ScoreResult) -> Vec<DomainRating> {
    result
        .ratings
        .iter()
        .map(|(d, r)| DomainRating {
            id: d.id,
            name: d.name,
            rating: r.get(),
        })
        .collect()
}
