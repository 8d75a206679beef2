//! Rewrites the class names inside a bound shorthand expression into
//! style-module lookups.

use crate::expr::{
    ClassExpr, Quote, module_lookup, scan_top_level, split_class_list, top_level_items,
};

/// Rewrite `expr` so every class key becomes a `module[...]` lookup.
///
/// Object and array expressions yield their rewritten *inner* content, other
/// expressions yield the rewritten expression. `None` means there is nothing
/// to merge: the expression, or the content between its delimiters, is empty.
///
/// ```text
/// { active: on, 'b-c': x }  ->  [m['active']]:on,[m['b-c']]:x
/// ['a b', c]                ->  m['a'],m['b'],m[c]
/// ok ? 'a' : 'b'            ->  ok ? m['a'] : m['b']
/// ```
pub fn rewrite_class_expression(expr: &str, module: &str, quote: Quote) -> Option<String> {
    let rewriter = Rewriter { module, quote };
    let out = match ClassExpr::parse(expr) {
        ClassExpr::Object(inner) => rewriter.object_entries(inner),
        ClassExpr::Array(inner) => rewriter.array_items(inner),
        ClassExpr::Opaque("") => return None,
        ClassExpr::Opaque(value) => rewriter.value(value)?,
    };
    (!out.is_empty()).then_some(out)
}

struct Rewriter<'a> {
    module: &'a str,
    quote: Quote,
}

impl Rewriter<'_> {
    fn lookup(&self, token: &str) -> String {
        module_lookup(self.module, token, self.quote)
    }

    fn object_entries(&self, inner: &str) -> String {
        top_level_items(inner)
            .into_iter()
            .flat_map(|entry| self.object_entry(entry))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// A quoted key naming several classes yields one entry per class,
    /// each sharing the value.
    fn object_entry(&self, entry: &str) -> Vec<String> {
        if entry.starts_with("...") {
            return vec![entry.to_string()];
        }
        let Some(colon) = find_top_level(entry, b':') else {
            // `{ active }` is shorthand for `{ active: active }`
            return vec![format!("[{}]:{entry}", self.lookup(entry))];
        };
        let key = entry[..colon].trim();
        let value = entry[colon + 1..].trim();
        if let Some(computed) = key.strip_prefix('[').and_then(|k| k.strip_suffix(']')) {
            return vec![format!("[{}[{}]]:{value}", self.module, computed.trim())];
        }
        match unquote(key) {
            Some(names) => split_class_list(names)
                .into_iter()
                .map(|name| format!("[{}]:{value}", self.lookup(name)))
                .collect(),
            None => vec![format!("[{}]:{value}", self.lookup(key))],
        }
    }

    fn array_items(&self, inner: &str) -> String {
        top_level_items(inner)
            .into_iter()
            .filter_map(|item| self.value(item))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rewrite one class value. A string literal holding several names
    /// expands to several comma separated lookups; `None` for `''`.
    fn value(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if let Some(text) = unquote(value) {
            let lookups: Vec<_> = split_class_list(text)
                .into_iter()
                .map(|t| self.lookup(t))
                .collect();
            return (!lookups.is_empty()).then(|| lookups.join(","));
        }
        match ClassExpr::parse(value) {
            ClassExpr::Object(inner) => return Some(format!("{{{}}}", self.object_entries(inner))),
            ClassExpr::Array(inner) => return Some(format!("[{}]", self.array_items(inner))),
            ClassExpr::Opaque(_) => {}
        }
        if let Some((cond, then, otherwise)) = split_ternary(value) {
            return Some(format!(
                "{} ? {} : {}",
                cond.trim(),
                self.branch(then),
                self.branch(otherwise)
            ));
        }
        // `||` and `??` bind looser than `&&`, so they are split first and
        // both operands are class values.
        if let Some((lhs, op, rhs)) = split_last_operator(value, &["||", "??"]) {
            return Some(format!("{} {op} {}", self.branch(lhs), self.branch(rhs)));
        }
        if let Some((lhs, _, rhs)) = split_last_operator(value, &["&&"]) {
            return Some(format!("{} && {}", lhs.trim(), self.branch(rhs)));
        }
        Some(format!("{}[{value}]", self.module))
    }

    /// A value in a position that must stay a single expression.
    fn branch(&self, value: &str) -> String {
        match self.value(value) {
            None => "''".to_string(),
            Some(v) if unquote(value.trim()).is_some() && top_level_items(&v).len() > 1 => {
                format!("[{v}]")
            }
            Some(v) => v,
        }
    }
}

/// Content of a plain string literal; template literals with substitutions
/// are not plain.
fn unquote(s: &str) -> Option<&str> {
    let first = s.chars().next()?;
    if !matches!(first, '\'' | '"' | '`') || s.len() < 2 || !s.ends_with(first) {
        return None;
    }
    let inner = &s[1..s.len() - 1];
    if inner.contains(first) || (first == '`' && inner.contains("${")) {
        return None;
    }
    Some(inner)
}

fn find_top_level(s: &str, needle: u8) -> Option<usize> {
    let mut found = None;
    scan_top_level(s, |i, b| {
        if b == needle {
            found = Some(i);
            return true;
        }
        false
    });
    found
}

/// Split at the last top-level occurrence of any of `ops`, as long as both
/// operands are non-empty.
fn split_last_operator<'s>(
    s: &'s str,
    ops: &[&'static str],
) -> Option<(&'s str, &'static str, &'s str)> {
    let bytes = s.as_bytes();
    let mut found = None;
    let mut skip_to = 0;
    scan_top_level(s, |i, _| {
        if i < skip_to {
            return false;
        }
        if let Some(op) = ops.iter().find(|op| bytes[i..].starts_with(op.as_bytes())) {
            found = Some((i, *op));
            skip_to = i + op.len();
        }
        false
    });
    let (pos, op) = found?;
    let (lhs, rhs) = (s[..pos].trim(), s[pos + op.len()..].trim());
    (!lhs.is_empty() && !rhs.is_empty()).then_some((lhs, op, rhs))
}

/// `cond ? a : b` split at its top-level operators. Optional chaining and
/// nullish coalescing are not ternaries.
fn split_ternary(s: &str) -> Option<(&str, &str, &str)> {
    let bytes = s.as_bytes();
    let mut question = None;
    let mut colon = None;
    let mut nested = 0usize;
    scan_top_level(s, |i, b| {
        match b {
            b'?' => {
                let next = bytes.get(i + 1).copied();
                let prev = i.checked_sub(1).map(|p| bytes[p]);
                let optional_chain =
                    next == Some(b'.') && !bytes.get(i + 2).is_some_and(u8::is_ascii_digit);
                let is_operator = optional_chain
                    || next == Some(b'?')
                    || prev == Some(b'?');
                if is_operator {
                    return false;
                }
                if question.is_none() {
                    question = Some(i);
                } else {
                    nested += 1;
                }
            }
            b':' if question.is_some() => {
                if nested == 0 {
                    colon = Some(i);
                    return true;
                }
                nested -= 1;
            }
            _ => {}
        }
        false
    });
    let (q, c) = (question?, colon?);
    Some((&s[..q], &s[q + 1..c], &s[c + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rw(expr: &str) -> Option<String> {
        rewrite_class_expression(expr, "m", Quote::Single)
    }

    #[test]
    fn identifiers_become_computed_lookups() {
        assert_eq!(rw("bar").as_deref(), Some("m[bar]"));
        assert_eq!(rw(" a.b ").as_deref(), Some("m[a.b]"));
    }

    #[test]
    fn string_literals_become_keyed_lookups() {
        assert_eq!(rw("'a'").as_deref(), Some("m['a']"));
        assert_eq!(rw(r#""a  b""#).as_deref(), Some("m['a'],m['b']"));
    }

    #[test]
    fn object_keys_are_rewritten() {
        assert_eq!(
            rw("{ active: isOn, 'b-c': x, [dyn]: y, short, ...rest }").as_deref(),
            Some("[m['active']]:isOn,[m['b-c']]:x,[m[dyn]]:y,[m['short']]:short,...rest")
        );
    }

    #[test]
    fn array_items_are_rewritten() {
        assert_eq!(
            rw("['a b', c, { d: e }, []]").as_deref(),
            Some("m['a'],m['b'],m[c],{[m['d']]:e},[]")
        );
    }

    #[test]
    fn quoted_keys_with_several_names_expand() {
        assert_eq!(
            rw("{ 'a b': x, '': y, c: z }").as_deref(),
            Some("[m['a']]:x,[m['b']]:x,[m['c']]:z")
        );
    }

    #[test]
    fn ternary_and_logical_and() {
        assert_eq!(
            rw("ok ? 'a' : 'b c'").as_deref(),
            Some("ok ? m['a'] : [m['b'],m['c']]")
        );
        assert_eq!(rw("a?.b ? x : ''").as_deref(), Some("a?.b ? m[x] : ''"));
        assert_eq!(rw("on && 'active'").as_deref(), Some("on && m['active']"));
    }

    #[test]
    fn logical_or_splits_before_and() {
        assert_eq!(rw("a && b || 'c'").as_deref(), Some("a && m[b] || m['c']"));
        assert_eq!(rw("a || b && c").as_deref(), Some("m[a] || b && m[c]"));
        assert_eq!(rw("x ?? 'y'").as_deref(), Some("m[x] ?? m['y']"));
        assert_eq!(
            rw("a || b || 'c d'").as_deref(),
            Some("m[a] || m[b] || [m['c'],m['d']]")
        );
        assert_eq!(rw("f(a || b)").as_deref(), Some("m[f(a || b)]"));
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(rw("   "), None);
        assert_eq!(rw("{}"), None);
        assert_eq!(rw("[ ]"), None);
        assert_eq!(rw("['']"), None);
        assert_eq!(rw("''"), None);
    }

    #[test]
    fn ternary_split_handles_nesting() {
        assert_eq!(
            split_ternary("a ? b ? c : d : e"),
            Some(("a ", " b ? c : d ", " e"))
        );
        assert_eq!(split_ternary("a?.b"), None);
    }
}
