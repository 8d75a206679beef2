use crate::error::SfcError;
use crate::template_ast::{AttrKind, Node, SourceRange, TemplateAttr};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Minimal hand-rolled HTML-ish parser with support for:
/// - nested elements, self-closing tags (`<input/>`) and void tags (`<br>`)
/// - attributes: static (`class="x"`), bind (`:value="expr"`), event (`@click="foo"`),
///   other `v-` directives; double-quoted, single-quoted, unquoted or valueless
/// - text, `{{ interpolation }}` and `<!-- comment -->` splits
///
/// Every element and attribute records its byte range in `input`.
pub fn parse_template_to_ast(input: &str) -> Result<Vec<Node>, SfcError> {
    parse_template_to_ast_at(input, 0)
}

/// Like [`parse_template_to_ast`], but every recorded range is shifted by `base`.
/// Used when `input` is a slice of a larger file (e.g. an SFC template body).
pub fn parse_template_to_ast_at(input: &str, base: usize) -> Result<Vec<Node>, SfcError> {
    let mut i = 0usize;
    let bytes = input.as_bytes();
    let mut stack: Vec<Node> = Vec::new();
    let mut roots: Vec<Node> = Vec::new();

    fn push_child(stack: &mut Vec<Node>, roots: &mut Vec<Node>, node: Node) {
        if let Some(Node::Element { children, .. }) = stack.last_mut() {
            children.push(node);
        } else {
            roots.push(node);
        }
    }

    while i < bytes.len() {
        if bytes[i] == b'<' && input[i..].starts_with("<!--") {
            let start = i + 4;
            let Some(len) = input[start..].find("-->") else {
                return Err(SfcError::UnterminatedComment { offset: base + i });
            };
            let text = input[start..start + len].to_string();
            i = start + len + 3;
            push_child(&mut stack, &mut roots, Node::Comment(text));
            continue;
        }

        if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1] == b'!' {
            // doctype and friends
            while i < bytes.len() && bytes[i] != b'>' {
                i += 1;
            }
            i += 1;
            continue;
        }

        if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            i += 2;
            let tag = read_ident(bytes, &mut i);
            skip_ws(bytes, &mut i);
            if i < bytes.len() && bytes[i] == b'>' {
                i += 1;
            }
            // only pop when something open matches, stray closers are dropped
            let open = stack
                .iter()
                .any(|n| matches!(n, Node::Element { tag: t, .. } if t == &tag));
            if open {
                while let Some(mut n) = stack.pop() {
                    let matched = matches!(&n, Node::Element { tag: t, .. } if t == &tag);
                    if let Node::Element { loc, .. } = &mut n {
                        loc.end = base + i;
                    }
                    push_child(&mut stack, &mut roots, n);
                    if matched {
                        break;
                    }
                }
            }
            continue;
        }

        if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
            let start = i;
            i += 1;
            let tag = read_ident(bytes, &mut i);
            let mut attrs: Vec<TemplateAttr> = Vec::new();
            let mut self_closing = false;

            loop {
                skip_ws(bytes, &mut i);
                if i >= bytes.len() {
                    break;
                }
                match bytes[i] {
                    b'/' => {
                        // possible "/>"
                        self_closing = true;
                        i += 1;
                        skip_ws(bytes, &mut i);
                        if i < bytes.len() && bytes[i] == b'>' {
                            i += 1;
                        }
                        break;
                    }
                    b'>' => {
                        i += 1;
                        break;
                    }
                    _ => {
                        if let Some(attr) = read_attribute(input, &mut i, base)? {
                            attrs.push(attr);
                        } else {
                            // skip unknown token
                            i += 1;
                        }
                    }
                }
            }

            let loc = SourceRange::new(base + start, base + i);
            if self_closing || VOID_TAGS.contains(&tag.to_ascii_lowercase().as_str()) {
                push_child(
                    &mut stack,
                    &mut roots,
                    Node::Element {
                        tag,
                        attrs,
                        children: Vec::new(),
                        self_closing,
                        loc,
                    },
                );
            } else {
                stack.push(Node::Element {
                    tag,
                    attrs,
                    children: Vec::new(),
                    self_closing: false,
                    loc,
                });
            }
        } else if i + 1 < bytes.len() && bytes[i] == b'{' && bytes[i + 1] == b'{' {
            i += 2;
            let start = i;
            while i + 1 < bytes.len() && !(bytes[i] == b'}' && bytes[i + 1] == b'}') {
                i += 1;
            }
            let expr = input[start..i.min(bytes.len())].trim().to_string();
            if i + 1 < bytes.len() {
                i += 2;
            } else {
                i = bytes.len();
            }
            push_child(&mut stack, &mut roots, Node::Interpolation(expr));
        } else {
            // text until the next tag-like '<' or '{{'
            let start = i;
            i += 1;
            while i < bytes.len()
                && !(bytes[i] == b'<'
                    && i + 1 < bytes.len()
                    && (bytes[i + 1].is_ascii_alphabetic()
                        || bytes[i + 1] == b'/'
                        || bytes[i + 1] == b'!'))
                && !(i + 1 < bytes.len() && bytes[i] == b'{' && bytes[i + 1] == b'{')
            {
                i += 1;
            }
            let mut text = input[start..i].to_string();
            if is_all_ws(&text) {
                text = " ".to_string();
            }
            push_child(&mut stack, &mut roots, Node::Text(text));
        }
    }

    // Unclosed tags: drain stack to roots (best-effort)
    while let Some(mut n) = stack.pop() {
        if let Node::Element { loc, .. } = &mut n {
            loc.end = base + bytes.len();
        }
        push_child(&mut stack, &mut roots, n);
    }

    roots.retain(|n| match n {
        Node::Text(t) => !is_all_ws(t),
        _ => true,
    });

    Ok(roots)
}

fn is_all_ws(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace())
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn read_ident(bytes: &[u8], i: &mut usize) -> String {
    let start = *i;
    while *i < bytes.len() {
        let c = bytes[*i];
        if c.is_ascii_alphanumeric() || c == b'_' || c == b'-' || c == b'.' || c == b':' {
            *i += 1;
        } else {
            break;
        }
    }
    String::from_utf8_lossy(&bytes[start..*i]).into_owned()
}

fn is_attr_name_byte(c: u8) -> bool {
    !(c.is_ascii_whitespace() || c == b'=' || c == b'>' || c == b'/' || c == b'"' || c == b'\'')
}

fn read_attribute(
    input: &str,
    i: &mut usize,
    base: usize,
) -> Result<Option<TemplateAttr>, SfcError> {
    let bytes = input.as_bytes();
    let name_start = *i;
    while *i < bytes.len() && is_attr_name_byte(bytes[*i]) {
        *i += 1;
    }
    if *i == name_start {
        return Ok(None);
    }
    let raw_name = &input[name_start..*i];
    let mut end = *i;

    let mut lookahead = *i;
    skip_ws(bytes, &mut lookahead);
    let mut value: Option<String> = None;
    if lookahead < bytes.len() && bytes[lookahead] == b'=' {
        lookahead += 1;
        skip_ws(bytes, &mut lookahead);
        *i = lookahead;
        value = Some(read_value(input, i, base)?);
        end = *i;
    }

    let (kind, name) = classify_name(raw_name);

    Ok(Some(TemplateAttr {
        name,
        value,
        kind,
        loc: SourceRange::new(base + name_start, base + end),
        raw: input[name_start..end].to_string(),
    }))
}

fn read_value(input: &str, i: &mut usize, base: usize) -> Result<String, SfcError> {
    let bytes = input.as_bytes();
    if *i >= bytes.len() {
        return Ok(String::new());
    }
    let quote = bytes[*i];
    if quote == b'"' || quote == b'\'' {
        let open = *i;
        *i += 1;
        let start = *i;
        while *i < bytes.len() && bytes[*i] != quote {
            *i += 1;
        }
        if *i >= bytes.len() {
            return Err(SfcError::UnterminatedAttribute { offset: base + open });
        }
        let s = input[start..*i].to_string();
        *i += 1; // closing quote
        return Ok(s);
    }
    let start = *i;
    while *i < bytes.len() && !bytes[*i].is_ascii_whitespace() && bytes[*i] != b'>' {
        if bytes[*i] == b'/' && *i + 1 < bytes.len() && bytes[*i + 1] == b'>' {
            break;
        }
        *i += 1;
    }
    Ok(input[start..*i].to_string())
}

/// Split a raw attribute name into its kind and name (or binding argument).
/// Modifiers (`:title.prop`) are dropped from the argument.
fn classify_name(raw_name: &str) -> (AttrKind, String) {
    let strip_modifiers = |s: &str| s.split('.').next().unwrap_or_default().to_string();

    if let Some(arg) = raw_name.strip_prefix(':') {
        (AttrKind::Bind, strip_modifiers(arg))
    } else if let Some(arg) = raw_name.strip_prefix("v-bind:") {
        (AttrKind::Bind, strip_modifiers(arg))
    } else if let Some(arg) = raw_name.strip_prefix('.') {
        // `.prop` shorthand
        (AttrKind::Bind, strip_modifiers(arg))
    } else if let Some(arg) = raw_name.strip_prefix('@') {
        (AttrKind::On, strip_modifiers(arg))
    } else if let Some(arg) = raw_name.strip_prefix("v-on:") {
        (AttrKind::On, strip_modifiers(arg))
    } else if let Some(raw_dir) = raw_name.strip_prefix("v-") {
        (AttrKind::Directive, normalize_directive_name(raw_dir))
    } else {
        (AttrKind::Static, raw_name.to_string())
    }
}

fn normalize_directive_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '_' {
            out.push('-');
        } else if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    // collapse any duplicated dashes
    let mut prev_dash = false;
    let mut compact = String::with_capacity(out.len());
    for c in out.chars() {
        if c == '-' {
            if !prev_dash {
                compact.push(c);
                prev_dash = true;
            }
        } else {
            compact.push(c);
            prev_dash = false;
        }
    }
    compact.trim_matches('-').to_string()
}
