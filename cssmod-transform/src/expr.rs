//! String-level helpers for class binding expressions.
//!
//! Expressions are opaque text. The only structure recognised here is the
//! outer delimiter (object / array / anything else), top-level separators and
//! quote characters.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    pub fn opposite(self) -> Quote {
        match self {
            Quote::Double => Quote::Single,
            Quote::Single => Quote::Double,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The quote delimiting the value in a raw attribute slice such as `:class='x'`.
/// Unquoted and valueless attributes report `Double`.
pub fn infer_quote(raw: &str) -> Quote {
    let Some((_, value)) = raw.split_once('=') else {
        return Quote::Double;
    };
    match value.trim_start().chars().next() {
        Some('\'') => Quote::Single,
        _ => Quote::Double,
    }
}

/// Swap every `'` with `"` and back, leaving template literals alone.
pub fn swap_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_template = false;
    let mut escaped = false;
    for ch in s.chars() {
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                out.push(ch);
            }
            '`' => {
                in_template = !in_template;
                out.push(ch);
            }
            '\'' if !in_template => out.push('"'),
            '"' if !in_template => out.push('\''),
            _ => out.push(ch),
        }
    }
    out
}

pub fn trim_expression(s: &str) -> &str {
    s.trim()
}

/// Top-level textual shape of a class binding expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
    Opaque,
}

pub fn shape_of(expr: &str) -> Shape {
    if is_object_exp(expr) {
        Shape::Object
    } else if is_array_exp(expr) {
        Shape::Array
    } else {
        Shape::Opaque
    }
}

fn delimited(expr: &str, open: char, close: char) -> bool {
    let expr = expr.trim();
    expr.len() >= 2 && expr.starts_with(open) && expr.ends_with(close)
}

pub fn is_object_exp(expr: &str) -> bool {
    delimited(expr, '{', '}')
}

pub fn is_array_exp(expr: &str) -> bool {
    delimited(expr, '[', ']')
}

/// Remove the outermost `{}` / `[]` pair. Inner text is returned verbatim;
/// anything else comes back trimmed but otherwise unchanged.
pub fn strip_delimiters(expr: &str) -> &str {
    let expr = expr.trim();
    match shape_of(expr) {
        Shape::Object | Shape::Array => &expr[1..expr.len() - 1],
        Shape::Opaque => expr,
    }
}

/// A class binding expression split by shape, carrying the text inside the
/// outer delimiters (or the whole expression when opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassExpr<'a> {
    Object(&'a str),
    Array(&'a str),
    Opaque(&'a str),
}

impl<'a> ClassExpr<'a> {
    pub fn parse(expr: &'a str) -> Self {
        let expr = trim_expression(expr);
        match shape_of(expr) {
            Shape::Object => ClassExpr::Object(strip_delimiters(expr)),
            Shape::Array => ClassExpr::Array(strip_delimiters(expr)),
            Shape::Opaque => ClassExpr::Opaque(expr),
        }
    }
}

/// Split a literal attribute value into class-name tokens.
pub fn split_class_list(value: &str) -> Vec<&str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Visit every byte of `s` that sits outside string literals and brackets.
/// Stops early when `f` returns `true`.
pub(crate) fn scan_top_level(s: &str, mut f: impl FnMut(usize, u8) -> bool) {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if f(i, b) {
                    return;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

/// Split on a separator that appears outside strings and brackets.
pub fn split_top_level(s: &str, sep: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    scan_top_level(s, |i, b| {
        if b == sep {
            parts.push(&s[start..i]);
            start = i + 1;
        }
        false
    });
    parts.push(&s[start..]);
    parts
}

/// Top-level, comma separated items of `s`, trimmed, empties dropped.
pub fn top_level_items(s: &str) -> Vec<&str> {
    split_top_level(s, b',')
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn boolean_entry(expr: &str) -> String {
    format!("[{expr}]:true")
}

/// Turn a list of class values into object content, one `[item]:true`
/// entry per top-level item.
pub fn to_object_entries(items: &str) -> String {
    top_level_items(items)
        .into_iter()
        .map(boolean_entry)
        .collect::<Vec<_>>()
        .join(",")
}

/// `module['token']` with the given quote.
pub fn module_lookup(module: &str, token: &str, quote: Quote) -> String {
    format!("{module}[{quote}{token}{quote}]")
}
