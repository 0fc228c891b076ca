use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The wall-clock time is too close to the limits of what chrono can
    /// represent to be resolved against the timezone.
    #[error("local time {0} is out of range for the target timezone")]
    OutOfRange(NaiveDateTime),
}

pub type Result<T> = std::result::Result<T, Error>;
