use thiserror::Error;

/// The only failure the engines report: a precondition on an input value
/// did not hold. No partial results accompany it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl EngineError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
