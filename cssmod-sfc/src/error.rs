use thiserror::Error;

#[derive(Debug, Error)]
pub enum SfcError {
    #[error("failed to split SFC: {0}")]
    Split(#[from] Box<pest::error::Error<crate::sfc::Rule>>),

    #[error("empty SFC")]
    Empty,

    #[error("unterminated attribute value starting at byte {offset}")]
    UnterminatedAttribute { offset: usize },

    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },
}
