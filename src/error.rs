use thiserror::Error;

/// Error during script generation.
///
/// All failures are local to one `generate` call: no partial script text is
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The requested target identifier is not one of the six supported targets.
    #[error("unsupported target: {0}")]
    UnsupportedTarget(String),

    /// A retained action is missing a field its kind requires.
    /// The index refers to the action's position in the raw recorded list.
    #[error("action {index}: missing required field `{field}`")]
    InvalidAction { index: usize, field: &'static str },

    /// No selector could be resolved for a selector-requiring action.
    #[error("action {index}: no selector could be resolved")]
    UnresolvedSelector { index: usize },
}
