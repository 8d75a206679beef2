use cssmod_sfc::{AttrKind, Node, parse_template_to_ast};

#[test]
fn parse_element_with_text() {
    let ast = parse_template_to_ast("<div>hi</div>").unwrap();
    assert_eq!(ast.len(), 1);
    match &ast[0] {
        Node::Element { tag, children, loc, .. } => {
            assert_eq!(tag, "div");
            assert_eq!(children.len(), 1);
            assert!(matches!(children[0], Node::Text(_)));
            assert_eq!((loc.start, loc.end), (0, 13));
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_text_interpolation_and_comment() {
    let ast = parse_template_to_ast("<p>Hello {{ a < b }}<!-- <b>no</b> --></p>").unwrap();
    let children = ast[0].children();
    assert!(matches!(children[0], Node::Text(_)));
    assert!(matches!(&children[1], Node::Interpolation(e) if e == "a < b"));
    assert!(matches!(&children[2], Node::Comment(c) if c.contains("<b>")));
}

#[test]
fn parse_attrs_static_bind_event() {
    let ast =
        parse_template_to_ast(r#"<input class="x" :value="count" @input="onInput"/>"#).unwrap();
    match &ast[0] {
        Node::Element {
            attrs,
            self_closing,
            ..
        } => {
            assert!(*self_closing);
            assert_eq!(attrs.len(), 3);
            assert!(attrs.iter().any(|a| a.is_static("class")));
            assert!(attrs.iter().any(|a| a.is_bind("value")));
            assert!(
                attrs
                    .iter()
                    .any(|a| a.kind == AttrKind::On && a.name == "input")
            );
        }
        _ => panic!("expected element"),
    }
}

#[test]
fn parse_long_form_bind_and_single_quotes() {
    let ast = parse_template_to_ast(r#"<div v-bind:class='{ a: b }' cls=plain></div>"#).unwrap();
    let attrs = ast[0].attrs().unwrap();
    assert!(attrs[0].is_bind("class"));
    assert_eq!(attrs[0].value.as_deref(), Some("{ a: b }"));
    assert_eq!(attrs[0].raw, "v-bind:class='{ a: b }'");
    assert!(attrs[1].is_static("cls"));
    assert_eq!(attrs[1].value.as_deref(), Some("plain"));
}

#[test]
fn parse_v_else_variants() {
    let tpl = r#"<div><p v-if="x">A</p><p v-else-if="y">B</p><p v-else>D</p></div>"#;
    let ast = parse_template_to_ast(tpl).unwrap();
    let names: Vec<_> = ast[0]
        .children()
        .iter()
        .flat_map(|c| c.attrs().unwrap_or_default())
        .filter(|a| a.kind == AttrKind::Directive)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["if", "else-if", "else"]);
}

#[test]
fn void_elements_do_not_swallow_siblings() {
    let ast = parse_template_to_ast(r#"<div><input><span cls="a"></span></div>"#).unwrap();
    let children = ast[0].children();
    assert_eq!(children.len(), 2);
    assert!(matches!(&children[1], Node::Element { tag, .. } if tag == "span"));
}

#[test]
fn unclosed_children_are_kept_when_parent_closes() {
    let ast = parse_template_to_ast(r#"<div><p cls="a"><b></div>"#).unwrap();
    assert_eq!(ast.len(), 1);
    let p = &ast[0].children()[0];
    assert_eq!(p.attrs().unwrap()[0].name, "cls");
    assert_eq!(p.children().len(), 1);
}
