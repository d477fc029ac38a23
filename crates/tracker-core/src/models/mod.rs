pub mod beacon;
pub mod environment;
pub mod fingerprint;
pub mod resolution;

pub use beacon::Beacon;
pub use environment::{EnvironmentSnapshot, ScreenInfo};
pub use fingerprint::{DeferredElement, FingerprintRecord};
pub use resolution::Resolution;
