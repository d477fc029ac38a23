use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of probing an identifier mechanism.
///
/// Three-way by contract: callers depend on telling "the mechanism exists but
/// holds nothing" apart from "the mechanism does not exist here".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution<T> {
    /// The mechanism exists and holds a value.
    Present(T),
    /// The mechanism exists but no value is stored under our key.
    Missing,
    /// The browser does not provide the mechanism at all.
    Unsupported,
}

impl<T> Resolution<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Resolution::Present(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Resolution::Unsupported)
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Resolution::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Map the resolved value, preserving `Missing`/`Unsupported`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolution<U> {
        match self {
            Resolution::Present(v) => Resolution::Present(f(v)),
            Resolution::Missing => Resolution::Missing,
            Resolution::Unsupported => Resolution::Unsupported,
        }
    }
}
