use cssmod_sfc::TemplateAttr;

/// The attributes of one element that take part in the class merge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classification<'a> {
    /// `:class="..."`
    pub bound_class: Option<&'a TemplateAttr>,
    /// `cls="..."`
    pub plain_shorthand: Option<&'a TemplateAttr>,
    /// `:cls="..."`
    pub bound_shorthand: Option<&'a TemplateAttr>,
}

impl Classification<'_> {
    pub fn has_shorthand(&self) -> bool {
        self.plain_shorthand.is_some() || self.bound_shorthand.is_some()
    }
}

/// Single pass over `attrs`; a later match replaces an earlier one.
pub fn classify<'a>(attrs: &'a [TemplateAttr], shorthand: &str) -> Classification<'a> {
    let mut out = Classification::default();
    for attr in attrs {
        if attr.is_bind("class") {
            out.bound_class = Some(attr);
        } else if attr.is_static(shorthand) {
            out.plain_shorthand = Some(attr);
        } else if attr.is_bind(shorthand) {
            out.bound_shorthand = Some(attr);
        }
    }
    out
}
