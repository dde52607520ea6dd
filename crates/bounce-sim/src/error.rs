use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation engine.
///
/// The hot path has no recoverable errors: inputs are either fixed constants
/// or internally generated. What remains are precondition violations and
/// failures of the GPU host contract.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation ran against a store that was never sized.
    #[error("empty particle store: call resize() before {0}")]
    EmptyStore(&'static str),

    /// The integration backend failed to advance the buffer (device lost,
    /// buffer map failure, ...).
    #[error("integration backend failure: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_message_names_the_operation() {
        let e = Error::EmptyStore("step()");
        let msg = e.to_string();
        assert!(msg.contains("empty particle store"));
        assert!(msg.contains("step()"));
    }
}
