pub mod error;
pub mod sfc;
pub mod template_ast;
pub mod template_parse;

pub use error::SfcError;
pub use sfc::{Attr, DEFAULT_MODULE_NAME, ScriptBlock, Sfc, StyleBlock, TemplateBlock, parse_sfc};
pub use template_ast::{AttrKind, Node, SourceRange, TemplateAttr};
pub use template_parse::{parse_template_to_ast, parse_template_to_ast_at};
