//! Folds a shorthand class attribute (`cls="a b"`, `:cls="expr"`) into the
//! element's `:class` binding, turning every class name into a lookup on the
//! component's style module (`$style['a']`).

pub mod classify;
pub mod compile;
pub mod error;
pub mod expr;
pub mod merge;
pub mod options;
pub mod rewrite;
pub mod splice;
pub mod walk;

pub use classify::{Classification, classify};
pub use compile::{TransformOutput, resolve_module_name, transform_sfc, transform_template};
pub use error::TransformError;
pub use merge::{Incoming, combine, merge};
pub use options::{DEFAULT_ATTR_NAME, TransformOptions};
pub use rewrite::rewrite_class_expression;
pub use splice::{SpliceBuffer, SpliceEdit, SpliceError};
pub use walk::walk;
