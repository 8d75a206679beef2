use cssmod_transform::{TransformOptions, transform_template};
use pretty_assertions::assert_eq;

fn run(src: &str) -> String {
    let options = TransformOptions::default().with_module_name("m");
    transform_template(src, &options).expect("transform").code
}

#[test]
fn untouched_without_shorthand() {
    let src = r#"<div class="a" :class="{b: c}"><p>{{ x }}</p></div>"#;
    let out = transform_template(src, &TransformOptions::default()).unwrap();
    assert!(!out.changed());
    assert_eq!(out.code, src);
}

#[test]
fn plain_shorthand_becomes_class_array() {
    assert_eq!(
        run(r#"<div cls="a b c"></div>"#),
        r#"<div :class="[m['a'],m['b'],m['c']]"></div>"#
    );
    assert_eq!(
        run(r#"<div cls='a'></div>"#),
        r#"<div :class='[m["a"]]'></div>"#
    );
}

#[test]
fn empty_plain_shorthand_is_removed() {
    assert_eq!(run(r#"<div cls=""></div>"#), "<div ></div>");
    assert_eq!(run(r#"<div cls></div>"#), "<div ></div>");
}

#[test]
fn plain_shorthand_into_object_binding() {
    assert_eq!(
        run(r#"<div :class="{active: true}" cls="x"></div>"#),
        r#"<div :class="{active: true,[m['x']]:true}" ></div>"#
    );
    assert_eq!(
        run(r#"<div :class="{}" cls="x"></div>"#),
        r#"<div :class="{[m['x']]:true}" ></div>"#
    );
}

#[test]
fn plain_shorthand_into_array_and_opaque_binding() {
    assert_eq!(
        run(r#"<div :class="['foo']" cls="x"></div>"#),
        r#"<div :class="['foo',m['x']]" ></div>"#
    );
    assert_eq!(
        run(r#"<div cls="x y" :class="type === 'add' ? 'red' : 'green'"></div>"#),
        r#"<div  :class="[type === 'add' ? 'red' : 'green',m['x'],m['y']]"></div>"#
    );
}

#[test]
fn bound_shorthand_into_object_binding() {
    assert_eq!(
        run(r#"<div :class="{a:true}" :cls="bar"></div>"#),
        r#"<div :class="{a:true,[m[bar]]:true}" ></div>"#
    );
}

#[test]
fn bound_shorthand_without_class_binding() {
    assert_eq!(
        run(r#"<div :cls="{ on: ok }"></div>"#),
        r#"<div :class="{[m['on']]:ok}"></div>"#
    );
    assert_eq!(
        run(r#"<div :cls="ok ? 'a' : 'b'"></div>"#),
        r#"<div :class="[ok ? m['a'] : m['b']]"></div>"#
    );
    assert_eq!(
        run(r#"<div :cls="['a', b]"></div>"#),
        r#"<div :class="[m['a'],m[b]]"></div>"#
    );
}

#[test]
fn bound_object_shorthand_into_array_binding() {
    assert_eq!(
        run(r#"<div :class="['a', b]" :cls="{ c: d }"></div>"#),
        r#"<div :class="{['a']:true,[b]:true,[m['c']]:d}" ></div>"#
    );
    assert_eq!(
        run(r#"<div :class="x" :cls="{ c: d }"></div>"#),
        r#"<div :class="{[x]:true,[m['c']]:d}" ></div>"#
    );
}

#[test]
fn absorbed_quotes_follow_the_destination() {
    assert_eq!(
        run(r#"<div :class="{a:true}" :cls='"x" + y'></div>"#),
        r#"<div :class="{a:true,[m['x' + y]]:true}" ></div>"#
    );
    assert_eq!(
        run(r#"<div :class='[a]' :cls="'b'"></div>"#),
        r#"<div :class='[a,m["b"]]' ></div>"#
    );
}

#[test]
fn empty_bound_shorthand_is_removed() {
    assert_eq!(run(r#"<div :cls=""></div>"#), "<div ></div>");
    assert_eq!(
        run(r#"<div :cls="" cls="a"></div>"#),
        r#"<div  :class="[m['a']]"></div>"#
    );
}

#[test]
fn both_shorthands_merge_into_one_binding() {
    assert_eq!(
        run(r#"<div :class="x" :cls="y" cls="a"></div>"#),
        r#"<div :class="[x,m[y],m['a']]"  ></div>"#
    );
    assert_eq!(
        run(r#"<div :cls="{on: ok}" cls="a"></div>"#),
        r#"<div :class="{[m['on']]:ok,[m['a']]:true}" ></div>"#
    );
}

#[test]
fn last_duplicate_wins() {
    assert_eq!(
        run(r#"<p cls="a" cls="b"></p>"#),
        r#"<p cls="a" :class="[m['b']]"></p>"#
    );
}

#[test]
fn nested_elements_are_visited() {
    assert_eq!(
        run(r#"<ul><li cls="item">{{ a }}<b cls="bold"/></li></ul>"#),
        r#"<ul><li :class="[m['item']]">{{ a }}<b :class="[m['bold']]"/></li></ul>"#
    );
}

#[test]
fn default_module_and_custom_attr_name() {
    let options = TransformOptions::default().with_attr_name("css");
    let out = transform_template(r#"<i cls="a" css="b"></i>"#, &options).unwrap();
    assert_eq!(out.code, r#"<i cls="a" :class="[$style['b']]"></i>"#);
    assert_eq!(out.edits.len(), 1);
}

#[test]
fn empty_class_binding_takes_shorthand_alone() {
    assert_eq!(
        run(r#"<div :class="" cls="x"></div>"#),
        r#"<div :class="[m['x']]" ></div>"#
    );
    assert_eq!(
        run(r#"<div :class cls="x"></div>"#),
        r#"<div :class="[m['x']]" ></div>"#
    );
}

#[test]
fn logical_operators_keep_their_grouping() {
    assert_eq!(
        run(r#"<div :cls="a && b || 'c'"></div>"#),
        r#"<div :class="[a && m[b] || m['c']]"></div>"#
    );
}
