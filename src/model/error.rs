use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("rating for domain '{domain}' is {value}, expected 1..=5")]
    OutOfRange { domain: &'static str, value: i64 },
    #[error("missing rating for domain '{0}'")]
    MissingDomain(&'static str),
    #[error("unknown domain '{0}'")]
    UnknownDomain(String),
    #[error("duplicate rating for domain '{0}'")]
    DuplicateDomain(&'static str),
}
