use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The platform reported no active keyboard input source.
    #[error("Failed to get current input source")]
    NoCurrentSource,

    /// The active input source carries no (or an empty) identifier.
    #[error("Failed to get input source ID")]
    MissingSourceId,

    #[error("Failed to select input source '{id}' (error code: {status})")]
    SelectFailed { id: String, status: i32 },

    /// A selection request was issued but the switch was never observed.
    #[error("Input source '{id}' was requested but {}", still_active(.last))]
    NotConfirmed { id: String, last: Option<String> },

    #[error("Direct input source control is only supported on macOS")]
    Unsupported,

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

fn still_active(last: &Option<String>) -> String {
    match last {
        Some(last) => format!("'{}' is still active", last),
        None => "the active input source could not be read".to_string(),
    }
}
