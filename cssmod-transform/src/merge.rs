//! Folds shorthand class attributes into the element's `:class` binding.

use cssmod_sfc::{SourceRange, TemplateAttr};
use tracing::debug;

use crate::classify::Classification;
use crate::expr::{
    ClassExpr, Quote, boolean_entry, infer_quote, is_object_exp, module_lookup, split_class_list,
    swap_quotes, to_object_entries, top_level_items, trim_expression,
};
use crate::rewrite::rewrite_class_expression;
use crate::splice::SpliceBuffer;

/// What gets merged into a class binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    /// Object content without the braces, appended verbatim.
    Entries(String),
    /// Class values, each becoming an array element or a boolean entry.
    Items(Vec<String>),
}

/// Combine an existing class binding expression with incoming class data.
///
/// An object on either side makes the result an object; the other side is
/// turned into `[item]:true` entries. Otherwise the result is an array.
pub fn combine(destination: &str, incoming: &Incoming) -> String {
    match (ClassExpr::parse(destination), incoming) {
        (ClassExpr::Object(content), Incoming::Entries(entries)) => {
            format!("{{{}{entries}}}", leading(content))
        }
        (ClassExpr::Object(content), Incoming::Items(items)) => {
            let entries: Vec<_> = items.iter().map(|i| boolean_entry(i)).collect();
            format!("{{{}{}}}", leading(content), entries.join(","))
        }
        (ClassExpr::Array(content), Incoming::Entries(entries)) => {
            format!("{{{}{entries}}}", leading(&to_object_entries(content)))
        }
        (ClassExpr::Array(content), Incoming::Items(items)) => {
            format!("[{}{}]", leading(content), items.join(","))
        }
        (ClassExpr::Opaque(""), Incoming::Entries(entries)) => format!("{{{entries}}}"),
        (ClassExpr::Opaque(expr), Incoming::Entries(entries)) => {
            format!("{{{},{entries}}}", boolean_entry(expr))
        }
        (ClassExpr::Opaque(expr), Incoming::Items(items)) => {
            format!("[{}{}]", leading(expr), items.join(","))
        }
    }
}

/// Existing content followed by a separator, or nothing when it is blank.
fn leading(content: &str) -> String {
    if content.trim().is_empty() {
        String::new()
    } else {
        format!("{content},")
    }
}

/// The class binding being built for one element.
#[derive(Debug, Clone)]
struct ClassTarget {
    range: SourceRange,
    quote: Quote,
    expr: String,
    dirty: bool,
}

impl ClassTarget {
    fn existing(attr: &TemplateAttr) -> Self {
        Self {
            range: attr.loc,
            quote: infer_quote(&attr.raw),
            expr: trim_expression(attr.value.as_deref().unwrap_or_default()).to_string(),
            dirty: false,
        }
    }

    fn replacing(attr: &TemplateAttr, quote: Quote, expr: String) -> Self {
        Self {
            range: attr.loc,
            quote,
            expr,
            dirty: true,
        }
    }

    fn absorb(&mut self, incoming: &Incoming) {
        self.expr = combine(&self.expr, incoming);
        self.dirty = true;
    }

    fn render(&self) -> String {
        format!(":class={q}{}{q}", self.expr, q = self.quote)
    }
}

/// Register the edits for one element. The bound shorthand is merged first,
/// then the plain one on top of whatever binding that produced.
pub fn merge(classified: &Classification<'_>, buffer: &mut SpliceBuffer, module: &str) {
    let mut target = classified.bound_class.map(ClassTarget::existing);
    let mut removed = Vec::new();

    if let Some(attr) = classified.bound_shorthand {
        merge_bound_shorthand(attr, &mut target, &mut removed, module);
    }
    if let Some(attr) = classified.plain_shorthand {
        merge_plain_shorthand(attr, &mut target, &mut removed, module);
    }

    if let Some(target) = target.filter(|t| t.dirty) {
        let text = target.render();
        debug!(
            start = target.range.start,
            end = target.range.end,
            class = %text,
            "rewrote class binding"
        );
        buffer.update(target.range, text);
    }
    for range in removed {
        buffer.remove(range);
    }
}

fn merge_bound_shorthand(
    attr: &TemplateAttr,
    target: &mut Option<ClassTarget>,
    removed: &mut Vec<SourceRange>,
    module: &str,
) {
    let quote = infer_quote(&attr.raw);
    let content = trim_expression(attr.value.as_deref().unwrap_or_default());
    let Some(mut rewritten) = rewrite_class_expression(content, module, quote.opposite()) else {
        debug!(start = attr.loc.start, "empty bound shorthand, removing");
        removed.push(attr.loc);
        return;
    };
    let object = is_object_exp(content);

    match target {
        Some(existing) => {
            if existing.quote != quote {
                rewritten = swap_quotes(&rewritten);
            }
            let incoming = if object {
                Incoming::Entries(rewritten)
            } else {
                let items = top_level_items(&rewritten);
                Incoming::Items(items.into_iter().map(String::from).collect())
            };
            existing.absorb(&incoming);
            removed.push(attr.loc);
        }
        None => {
            let expr = if object {
                format!("{{{rewritten}}}")
            } else {
                format!("[{rewritten}]")
            };
            *target = Some(ClassTarget::replacing(attr, quote, expr));
        }
    }
}

fn merge_plain_shorthand(
    attr: &TemplateAttr,
    target: &mut Option<ClassTarget>,
    removed: &mut Vec<SourceRange>,
    module: &str,
) {
    let tokens = split_class_list(attr.value.as_deref().unwrap_or_default());
    if tokens.is_empty() {
        debug!(start = attr.loc.start, "empty shorthand, removing");
        removed.push(attr.loc);
        return;
    }

    match target {
        Some(existing) => {
            let quote = existing.quote.opposite();
            let lookups = tokens
                .into_iter()
                .map(|t| module_lookup(module, t, quote))
                .collect();
            existing.absorb(&Incoming::Items(lookups));
            removed.push(attr.loc);
        }
        None => {
            let quote = infer_quote(&attr.raw);
            let lookups: Vec<_> = tokens
                .into_iter()
                .map(|t| module_lookup(module, t, quote.opposite()))
                .collect();
            let expr = format!("[{}]", lookups.join(","));
            *target = Some(ClassTarget::replacing(attr, quote, expr));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(v: &[&str]) -> Incoming {
        Incoming::Items(v.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn object_destination_stays_object() {
        assert_eq!(combine("{a:1}", &items(&["x"])), "{a:1,[x]:true}");
        assert_eq!(combine("{}", &items(&["x", "y"])), "{[x]:true,[y]:true}");
        let entries = Incoming::Entries("b:2".into());
        assert_eq!(combine("{ a:1 }", &entries), "{ a:1 ,b:2}");
    }

    #[test]
    fn array_destination() {
        assert_eq!(combine("['a', b]", &items(&["x"])), "['a', b,x]");
        assert_eq!(combine("[]", &items(&["x"])), "[x]");
        assert_eq!(
            combine("['a', b]", &Incoming::Entries("c:d".into())),
            "{['a']:true,[b]:true,c:d}"
        );
    }

    #[test]
    fn opaque_destination() {
        assert_eq!(combine("cls", &items(&["x", "y"])), "[cls,x,y]");
        assert_eq!(
            combine("a ? 'b' : 'c'", &Incoming::Entries("d:e".into())),
            "{[a ? 'b' : 'c']:true,d:e}"
        );
    }

    #[test]
    fn empty_opaque_destination_has_no_separator() {
        assert_eq!(combine("", &items(&["x"])), "[x]");
        assert_eq!(combine("  ", &Incoming::Entries("d:e".into())), "{d:e}");
    }

    #[test]
    fn object_merges_concatenate_entries() {
        let (a, b) = (Incoming::Entries("a:1".into()), Incoming::Entries("b:2".into()));
        let ab = combine(&combine("{}", &a), &b);
        let ba = combine(&combine("{}", &b), &a);
        assert_eq!(ab, "{a:1,b:2}");
        assert_eq!(ba, "{b:2,a:1}");
    }
}
