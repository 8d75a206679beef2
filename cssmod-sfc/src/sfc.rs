use pest::Parser;
use pest::iterators::Pair;

use crate::error::SfcError;
use crate::template_ast::SourceRange;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct SfcParser;

/// Name the style module is exposed under when `<style module>` carries no value.
pub const DEFAULT_MODULE_NAME: &str = "$style";

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>, // boolean attrs allowed, e.g., `scoped` or `module`
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
    /// Byte span of `content` within the SFC source.
    pub span: SourceRange,
}

impl TemplateBlock {
    pub fn lang(&self) -> Option<&str> {
        attr_value(&self.attrs, "lang")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
    pub span: SourceRange,
    pub setup: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
    pub span: SourceRange,
}

impl StyleBlock {
    /// `<style module>` exposes `$style`, `<style module="name">` exposes `name`.
    pub fn module_name(&self) -> Option<&str> {
        let attr = self.attrs.iter().find(|a| a.name == "module")?;
        match attr.value.as_deref() {
            None | Some("") => Some(DEFAULT_MODULE_NAME),
            Some(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sfc {
    pub template: Option<TemplateBlock>,
    pub script_setup: Option<ScriptBlock>,
    pub script: Option<ScriptBlock>,
    pub styles: Vec<StyleBlock>,
}

impl Sfc {
    /// The first style module declared by the component, if any.
    pub fn style_module_name(&self) -> Option<&str> {
        self.styles.iter().find_map(StyleBlock::module_name)
    }
}

pub fn parse_sfc(source: &str) -> Result<Sfc, SfcError> {
    let mut sfc = Sfc::default();

    let mut pairs = SfcParser::parse(Rule::file, source).map_err(Box::new)?;
    let file = pairs.next().ok_or(SfcError::Empty)?;
    debug_assert!(file.as_rule() == Rule::file);

    for node in file.into_inner() {
        match node.as_rule() {
            Rule::block => {
                for inner in node.into_inner() {
                    consume_top_level(inner, &mut sfc);
                }
            }
            Rule::template | Rule::script | Rule::style => {
                consume_top_level(node, &mut sfc);
            }
            _ => {}
        }
    }

    Ok(sfc)
}

fn consume_top_level(node: Pair<Rule>, sfc: &mut Sfc) {
    match node.as_rule() {
        Rule::template => {
            let (attrs, content, span) =
                parse_block(node, Rule::template_open, Rule::template_body);
            sfc.template = Some(TemplateBlock { attrs, content, span });
        }
        Rule::script => {
            let (attrs, content, span) = parse_block(node, Rule::script_open, Rule::script_body);
            let setup = has_bool_attr(&attrs, "setup");
            let sb = ScriptBlock {
                attrs,
                content,
                span,
                setup,
            };
            if setup {
                sfc.script_setup = Some(sb);
            } else {
                sfc.script = Some(sb);
            }
        }
        Rule::style => {
            let (attrs, content, span) = parse_block(node, Rule::style_open, Rule::style_body);
            sfc.styles.push(StyleBlock { attrs, content, span });
        }
        _ => {}
    }
}

fn parse_block(block: Pair<Rule>, open: Rule, body: Rule) -> (Vec<Attr>, String, SourceRange) {
    let mut attrs = Vec::new();
    let mut content = String::new();
    let mut range = SourceRange::default();

    for p in block.into_inner() {
        let rule = p.as_rule();
        if rule == open {
            // attributes are direct children of *_open
            for a in p.into_inner() {
                if a.as_rule() == Rule::attribute {
                    attrs.push(parse_attr(a));
                }
            }
        } else if rule == body {
            let span = p.as_span();
            range = SourceRange::new(span.start(), span.end());
            content = p.as_str().to_string();
        }
    }
    (attrs, content, range)
}

fn parse_attr(attr: Pair<Rule>) -> Attr {
    // attribute = ident ( "=" (quoted | bare) )?
    let mut name = String::new();
    let mut value: Option<String> = None;

    for part in attr.into_inner() {
        match part.as_rule() {
            Rule::ident => name = part.as_str().to_string(),
            Rule::quoted => value = Some(strip_quotes(part.as_str())),
            Rule::bare => value = Some(part.as_str().to_string()),
            _ => {}
        }
    }
    Attr { name, value }
}

fn strip_quotes(s: &str) -> String {
    let b = s.as_bytes();
    if b.len() >= 2
        && ((b[0] == b'"' && b[b.len() - 1] == b'"') || (b[0] == b'\'' && b[b.len() - 1] == b'\''))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

fn has_bool_attr(attrs: &[Attr], key: &str) -> bool {
    attrs.iter().any(|a| a.name == key)
}

fn attr_value<'a>(attrs: &'a [Attr], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name == key)
        .and_then(|a| a.value.as_deref())
}
