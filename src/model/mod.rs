pub mod bands;
pub mod error;
pub mod rating;
pub mod scores;
