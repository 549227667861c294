//! Personal Gross National Happiness index.
//!
//! Nine fixed domains are rated 1..=5; the ratings are validated, summed and
//! scaled to a percentage of the maximum, and the percentage is placed in one
//! of four bands.

pub mod catalog;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::bands::Band;
pub use model::error::ScoreError;
pub use model::rating::{Rating, RatingSheet};
pub use model::scores::ScoreResult;
pub use pipeline::stage1_validate::{RawRatings, validate};
pub use pipeline::stage2_score::{score, score_sheet};
