use cssmod_sfc::Node;

use crate::classify::classify;
use crate::merge::merge;
use crate::splice::SpliceBuffer;

/// Depth-first, pre-order. Only nodes with an attribute list are merged and
/// descended into; text, interpolation and comment nodes are skipped.
pub fn walk(nodes: &[Node], buffer: &mut SpliceBuffer, attr_name: &str, module: &str) {
    for node in nodes {
        let Some(attrs) = node.attrs() else {
            continue;
        };
        let classified = classify(attrs, attr_name);
        if classified.has_shorthand() {
            merge(&classified, buffer, module);
        }
        walk(node.children(), buffer, attr_name, module);
    }
}
