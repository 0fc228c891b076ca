use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `value` could collide with a string numbered by `suffix`: either an
    /// input already ends in the suffix followed by digits, or the suffix
    /// itself ends in a digit, in which case `value` is the suffix.
    #[error("invalid argument {value:?}: collides with strings numbered by suffix {suffix:?}")]
    InvalidArgument { value: String, suffix: String },
    #[error("Regex error")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
