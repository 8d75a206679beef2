use cssmod_sfc::{
    DEFAULT_MODULE_NAME, Node, Sfc, parse_sfc, parse_template_to_ast, parse_template_to_ast_at,
};
use tracing::{debug, warn};

use crate::error::TransformError;
use crate::options::TransformOptions;
use crate::splice::{SpliceBuffer, SpliceEdit};
use crate::walk::walk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    pub edits: Vec<SpliceEdit>,
}

impl TransformOutput {
    fn unchanged(source: &str) -> Self {
        Self {
            code: source.to_string(),
            edits: Vec::new(),
        }
    }

    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Transform bare template markup (the inside of a `<template>` block).
pub fn transform_template(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    let module = options.module_name.as_deref().unwrap_or(DEFAULT_MODULE_NAME);
    let nodes = parse_template_to_ast(source)?;
    run(source, &nodes, &options.attr_name, module)
}

/// Transform a whole single-file component, leaving everything outside its
/// `<template>` block untouched.
pub fn transform_sfc(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    let sfc = parse_sfc(source)?;
    let Some(template) = &sfc.template else {
        debug!("no <template> block");
        return Ok(TransformOutput::unchanged(source));
    };
    match template.lang() {
        None | Some("html") => {}
        Some(lang) => {
            warn!(lang, "skipping template with unsupported lang");
            return Ok(TransformOutput::unchanged(source));
        }
    }

    let module = resolve_module_name(options, &sfc);
    let nodes = parse_template_to_ast_at(&template.content, template.span.start)?;
    run(source, &nodes, &options.attr_name, module)
}

/// Explicit option, then the first `<style module>`, then `$style`.
pub fn resolve_module_name<'a>(options: &'a TransformOptions, sfc: &'a Sfc) -> &'a str {
    options
        .module_name
        .as_deref()
        .or_else(|| sfc.style_module_name())
        .unwrap_or(DEFAULT_MODULE_NAME)
}

fn run(
    source: &str,
    nodes: &[Node],
    attr_name: &str,
    module: &str,
) -> Result<TransformOutput, TransformError> {
    let mut buffer = SpliceBuffer::new();
    walk(nodes, &mut buffer, attr_name, module);
    debug!(attr_name, module, edits = buffer.len(), "walked template");

    if buffer.is_empty() {
        return Ok(TransformOutput::unchanged(source));
    }
    let code = buffer.apply(source)?;
    Ok(TransformOutput {
        code,
        edits: buffer.into_edits(),
    })
}
