use thiserror::Error;

/// Errors raised while building a [`Converter`](crate::Converter) or its parts.
///
/// Conversions themselves never fail; only construction can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),

    #[error("invalid acronym '{entry}': {reason}")]
    InvalidAcronym { entry: String, reason: &'static str },

    #[error("failed to build acronym index")]
    AcronymIndex(#[from] fst::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
