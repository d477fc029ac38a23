use crate::errors::TrackerResult;

/// Reversible string transform used to lightly obfuscate stored and cookie
/// values. May be the identity.
///
/// Contract: `decode(encode(x)) == x` for every string `x`. A pair that
/// violates this corrupts identifier round-trips silently — it cannot be
/// detected at runtime, so it is an integration contract, not a checked
/// invariant.
pub trait ICodec: Send + Sync {
    fn encode(&self, raw: &str) -> String;

    /// Fails on input the codec cannot have produced.
    fn decode(&self, encoded: &str) -> TrackerResult<String>;

    fn name(&self) -> &str;
}
