/// Byte range into the source the node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Static,    // class="app"
    Bind,      // :value="count" / v-bind:value="count"
    On,        // @click="increment" / v-on:click="increment"
    Directive, // v-if="show"
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateAttr {
    /// Attribute name, or the binding argument for `Bind`/`On`.
    pub name: String,
    pub value: Option<String>,
    pub kind: AttrKind,
    pub loc: SourceRange,
    /// The attribute exactly as written, e.g. `:class='{ a: b }'`.
    pub raw: String,
}

impl TemplateAttr {
    pub fn is_bind(&self, arg: &str) -> bool {
        self.kind == AttrKind::Bind && self.name == arg
    }

    pub fn is_static(&self, name: &str) -> bool {
        self.kind == AttrKind::Static && self.name == name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<TemplateAttr>,
        children: Vec<Node>,
        self_closing: bool,
        loc: SourceRange,
    },
    Text(String),
    Interpolation(String), // {{ expr }}
    Comment(String),       // <!-- text -->
}

impl Node {
    /// Only elements carry an attribute list; it may be empty.
    pub fn attrs(&self) -> Option<&[TemplateAttr]> {
        match self {
            Node::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }
}
