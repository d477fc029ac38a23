/// Agent-level errors.
///
/// Missing capabilities (no storage, no cookies, no config element) are never
/// errors — they resolve to `Resolution::Unsupported` or an empty value.
/// These variants cover genuine faults: malformed data and misuse of the
/// beacon queue.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    #[error("codec rejected input: {message}")]
    Codec { message: String },

    #[error("storage write failed: {message}")]
    Storage { message: String },

    #[error("beacon {id} is already in flight")]
    BeaconInFlight { id: String },
}

pub type TrackerResult<T> = Result<T, TrackerError>;
