use cssmod_sfc::SfcError;
use thiserror::Error;

use crate::splice::SpliceError;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] SfcError),

    #[error("failed to apply edits: {0}")]
    Splice(#[from] SpliceError),
}
