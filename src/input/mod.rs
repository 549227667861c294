use thiserror::Error;

pub mod file;
pub mod pairs;
pub mod session;

pub use file::load_ratings_file;
pub use pairs::{fill_defaults, parse_rating_pair};
pub use session::run_questionnaire;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}
